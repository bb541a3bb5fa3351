use crate::error::Result;
use crate::ring::CircularList;
use std::fmt::Display;

/// Renders a round-robin walk over the list.
///
/// Starts wherever the cursor currently is. Each stop reads the current
/// element `reads_per_stop` times (showing the cursor is stable across
/// reads), then advances. One numbered line per access, with a header line
/// giving the list size.
///
/// Fails on an empty list when at least one read is requested.
pub fn render_walk<T: Display>(
    list: &mut CircularList<T>,
    stops: usize,
    reads_per_stop: usize,
) -> Result<String> {
    let mut output = format!("size {}\n", list.len());
    for _ in 0..stops {
        for access in 0..reads_per_stop {
            output.push_str(&format!("access#{}: {}\n", access, list.current()?));
        }
        output.push_str("select next\n");
        list.advance();
    }
    Ok(output)
}

/// Writes a string to a file.
pub fn to_file(content: &str, path: &str) {
    std::fs::write(path, content).expect("Rust should write to file");
}
