//! # ring_list
//!
//! A circular doubly-linked list with a single movable cursor, backed by an
//! index arena instead of pointers.
//!
//! The list is append-only and unbounded: "circular" refers to how the
//! cursor moves ([`advance`](CircularList::advance) past the tail wraps to
//! the head, [`retreat`](CircularList::retreat) past the head wraps to the
//! tail), not to a fixed capacity. The crate also carries the demo feed the
//! list was built to serve: a week of hardcoded affect samples under
//! [`sample`], rendered by [`output`].

pub mod error;
pub mod output;
pub mod ring;
pub mod sample;
pub mod testing;
pub mod types;

pub use error::Error;
pub use ring::CircularList;
pub use types::FeedRecord;
