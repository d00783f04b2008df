//! Board geometry for the fixed square tabletop.

/// Side length of the square tabletop, in cells.
///
/// Valid coordinates run from `0` to `BOARD_SIZE - 1` on both axes.
pub const BOARD_SIZE: i32 = 5;

/// Check whether a coordinate pair lies on the tabletop.
///
/// This is a pure predicate with no failure modes: any pair of integers
/// is a valid question, off-board pairs simply answer `false`.
///
/// # Example
///
/// ```rust
/// use tabletop::core::is_on_board;
///
/// assert!(is_on_board(0, 0));
/// assert!(is_on_board(4, 4));
/// assert!(!is_on_board(5, 0));
/// assert!(!is_on_board(0, -1));
/// ```
pub fn is_on_board(x: i32, y: i32) -> bool {
    (0..BOARD_SIZE).contains(&x) && (0..BOARD_SIZE).contains(&y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_on_board() {
        assert!(is_on_board(0, 0));
        assert!(is_on_board(0, BOARD_SIZE - 1));
        assert!(is_on_board(BOARD_SIZE - 1, 0));
        assert!(is_on_board(BOARD_SIZE - 1, BOARD_SIZE - 1));
    }

    #[test]
    fn cells_past_either_edge_are_off_board() {
        assert!(!is_on_board(BOARD_SIZE, 0));
        assert!(!is_on_board(0, BOARD_SIZE));
        assert!(!is_on_board(-1, 2));
        assert!(!is_on_board(2, -1));
    }

    #[test]
    fn bounds_check_is_per_axis() {
        assert!(!is_on_board(2, BOARD_SIZE + 3));
        assert!(!is_on_board(-4, 2));
        assert!(!is_on_board(-1, -1));
    }
}
