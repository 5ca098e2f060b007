//! The B3/S23 transition rule.

/// Compute the next state of a single cell.
///
/// 1. Dead cell with exactly 3 live neighbors is born
/// 2. Live cell with 2 or 3 live neighbors survives
/// 3. Every other combination ends dead
pub const fn next_state(is_alive: bool, neighbors: u8) -> bool {
    match (is_alive, neighbors) {
        (true, 2 | 3) => true,
        (false, 3) => true,
        _ => false,
    }
}
