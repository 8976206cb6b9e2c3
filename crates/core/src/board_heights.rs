//! Board with precomputed column heights for fast evaluation

use crate::Board;

/// Board view with cached column heights.
/// Use for eval/heuristics where several metrics read the same heights.
#[derive(Clone, Debug)]
pub struct BoardWithHeights<'a> {
    board: &'a Board,
    heights: Vec<u32>,
}

impl<'a> BoardWithHeights<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            heights: board.column_heights(),
        }
    }

    /// O(1) height lookup
    #[inline(always)]
    pub fn height(&self, x: usize) -> u32 {
        self.heights[x]
    }

    pub fn aggregate_height(&self) -> u32 {
        self.heights.iter().sum()
    }

    /// Sum of height differences between neighbouring columns
    pub fn bumpiness(&self) -> u32 {
        self.heights
            .windows(2)
            .map(|pair| pair[0].abs_diff(pair[1]))
            .sum()
    }

    /// Holes only exist below a column's surface, so the scan
    /// starts at the cached top instead of row 0.
    pub fn holes(&self) -> u32 {
        let floor = self.board.height();
        let mut holes = 0u32;
        for (x, &h) in self.heights.iter().enumerate() {
            let top = floor - h as usize;
            holes += (top..floor)
                .filter(|&y| !self.board.is_filled(x, y))
                .count() as u32;
        }
        holes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_heights() {
        let board = Board::default();
        let bh = BoardWithHeights::new(&board);
        for x in 0..board.width() {
            assert_eq!(bh.height(x), 0);
        }
        assert_eq!(bh.aggregate_height(), 0);
        assert_eq!(bh.bumpiness(), 0);
        assert_eq!(bh.holes(), 0);
    }

    #[test]
    fn test_single_cell_height() {
        let mut board = Board::default();
        board.set(5, 16, 1); // fourth row from the floor
        let bh = BoardWithHeights::new(&board);
        assert_eq!(bh.height(5), 4);
        assert_eq!(bh.aggregate_height(), 4);
        assert_eq!(bh.holes(), 3);
        assert_eq!(bh.holes(), board.count_holes());
    }

    #[test]
    fn test_bumpiness() {
        let mut board = Board::default();
        // Column heights: [1, 3, 1, 3, 1, 3, 1, 3, 1, 3]
        for x in (1..10).step_by(2) {
            board.set(x, 19, 1);
            board.set(x, 18, 1);
            board.set(x, 17, 1);
        }
        for x in (0..10).step_by(2) {
            board.set(x, 19, 1);
        }
        let bh = BoardWithHeights::new(&board);
        // Differences: |1-3| + |3-1| + |1-3| + ... = 2 * 9 = 18
        assert_eq!(bh.bumpiness(), 18);
        assert_eq!(bh.aggregate_height(), 20);
    }
}
