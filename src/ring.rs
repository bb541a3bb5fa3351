use crate::error::{Error, Result};

/// One slot of the arena.
///
/// Links are arena indices. `None` marks the open ends of the chain: the
/// wrap from tail to head is applied by the cursor moves, never stored in
/// the links themselves.
#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<usize>,
    prev: Option<usize>,
}

/// Circular doubly-linked list with a single movable cursor.
///
/// Nodes live in a growable arena and address each other by index, so the
/// list owns all of its memory and there are no pointer cycles to manage.
/// The chain itself stays linear (`tail.next` and `head.prev` are absent);
/// [`advance`](CircularList::advance), [`retreat`](CircularList::retreat)
/// and [`select`](CircularList::select) wrap around the open ends, which is
/// what makes the list behave as a ring.
///
/// Append-only: elements can be added but never removed. Single-threaded,
/// no interior synchronization.
#[derive(Debug, Clone)]
pub struct CircularList<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    cursor: Option<usize>,
}

impl<T> CircularList<T> {
    /// Creates an empty list. The cursor is seated by the first push.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
            cursor: None,
        }
    }

    /// Number of elements held.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends `value` after the current tail.
    ///
    /// The first push seats `head`, `tail` and the cursor on the new node.
    /// Later pushes leave the cursor where it is.
    pub fn push(&mut self, value: T) {
        let idx = self.nodes.len();
        self.nodes.push(Node {
            value,
            next: None,
            prev: self.tail,
        });
        match self.tail {
            Some(old_tail) => self.nodes[old_tail].next = Some(idx),
            None => {
                self.head = Some(idx);
                self.cursor = Some(idx);
            }
        }
        self.tail = Some(idx);
    }

    /// Returns the element under the cursor.
    ///
    /// Fails with [`Error::EmptyCollection`] when the list is empty.
    pub fn current(&self) -> Result<&T> {
        let cur = self.cursor.ok_or(Error::EmptyCollection)?;
        Ok(&self.nodes[cur].value)
    }

    /// Mutable access to the element under the cursor.
    pub fn current_mut(&mut self) -> Result<&mut T> {
        let cur = self.cursor.ok_or(Error::EmptyCollection)?;
        Ok(&mut self.nodes[cur].value)
    }

    /// Moves the cursor one step forward, wrapping from tail to head.
    /// Does nothing on an empty list.
    pub fn advance(&mut self) {
        if let Some(cur) = self.cursor {
            self.cursor = self.nodes[cur].next.or(self.head);
        }
    }

    /// Moves the cursor one step backward, wrapping from head to tail.
    /// Does nothing on an empty list.
    pub fn retreat(&mut self) {
        if let Some(cur) = self.cursor {
            self.cursor = self.nodes[cur].prev.or(self.tail);
        }
    }

    /// Repositions the cursor `index` steps forward from head.
    ///
    /// Stepping reuses [`advance`](CircularList::advance), so the offset
    /// wraps exactly like repeated forward moves do: `select(len())` lands
    /// on the same element as `select(0)`. Runs in O(`index`).
    ///
    /// Fails with [`Error::EmptyCollection`] when the list is empty.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if self.is_empty() {
            return Err(Error::EmptyCollection);
        }
        self.cursor = self.head;
        for _ in 0..index {
            self.advance();
        }
        Ok(())
    }

    /// Iterates over the elements in insertion order, head to tail, once.
    ///
    /// This is plain iteration, not cursor traversal: it neither reads nor
    /// moves the cursor, and it does not wrap.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        // append-only, so arena order is insertion order
        self.nodes.iter().map(|node| &node.value)
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for CircularList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
