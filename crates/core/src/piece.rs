//! Piece shapes and the clockwise rotation transform.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::board::flatten_rows;
use crate::GridError;

/// The seven canonical shapes. Order matches the catalog the
/// chance layer averages over.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    Z,
    S,
    J,
    L,
    O,
    T,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::T,
    ];

    /// Cell tag written into the board by this shape (1..=7)
    pub fn tag(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::Z => 2,
            PieceKind::S => 3,
            PieceKind::J => 4,
            PieceKind::L => 5,
            PieceKind::O => 6,
            PieceKind::T => 7,
        }
    }

    /// Spawn orientation grid
    pub fn shape(self) -> Piece {
        // row-major occupancy masks
        let (width, mask): (usize, &[u8]) = match self {
            PieceKind::I => (4, &[1, 1, 1, 1]),
            PieceKind::Z => (3, &[1, 1, 0, 0, 1, 1]),
            PieceKind::S => (3, &[0, 1, 1, 1, 1, 0]),
            PieceKind::J => (3, &[1, 0, 0, 1, 1, 1]),
            PieceKind::L => (3, &[0, 0, 1, 1, 1, 1]),
            PieceKind::O => (2, &[1, 1, 1, 1]),
            PieceKind::T => (3, &[0, 1, 0, 1, 1, 1]),
        };
        let tag = self.tag();
        Piece {
            width,
            height: mask.len() / width,
            cells: mask.iter().map(|&filled| filled * tag).collect(),
        }
    }
}

/// Rectangular grid of cell tags for one orientation of a piece.
/// Always holds at least one filled cell.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Piece {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Piece {
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let (width, height, cells) = flatten_rows(rows)?;
        if cells.iter().all(|&cell| cell == 0) {
            return Err(GridError::NoFilledCells);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[y * self.width + x]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width)
    }

    /// `(dx, dy, tag)` of every filled cell, relative to the top-left corner
    pub fn filled_cells(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell != 0)
            .map(move |(i, &cell)| ((i % self.width) as i32, (i / self.width) as i32, cell))
    }

    /// Rotate 90 degrees clockwise: reverse the rows, then transpose.
    pub fn rotate(&self) -> Piece {
        let width = self.height;
        let height = self.width;
        let mut cells = Vec::with_capacity(self.cells.len());
        for y in 0..height {
            for x in 0..width {
                cells.push(self.get(y, self.height - 1 - x));
            }
        }
        Piece {
            width,
            height,
            cells,
        }
    }

    /// The four orientations, index = number of clockwise turns
    pub fn rotations(&self) -> [Piece; 4] {
        let r1 = self.rotate();
        let r2 = r1.rotate();
        let r3 = r2.rotate();
        [self.clone(), r1, r2, r3]
    }
}

impl From<PieceKind> for Piece {
    fn from(kind: PieceKind) -> Self {
        kind.shape()
    }
}

impl Serialize for Piece {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.rows())
    }
}

impl<'de> Deserialize<'de> for Piece {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: Vec<Vec<u8>> = Vec::deserialize(deserializer)?;
        Piece::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pieces() {
        assert_eq!(PieceKind::ALL.len(), 7);
        for (i, kind) in PieceKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.tag() as usize, i + 1);
            assert_eq!(kind.shape().filled_cells().count(), 4);
        }
    }

    #[test]
    fn test_rotate_t_clockwise() {
        // .T.      T.
        // TTT  ->  TT
        //          T.
        let r = PieceKind::T.shape().rotate();
        assert_eq!(r.width(), 2);
        assert_eq!(r.height(), 3);
        let rows: Vec<&[u8]> = r.rows().collect();
        assert_eq!(rows, vec![&[7, 0][..], &[7, 7][..], &[7, 0][..]]);
    }

    #[test]
    fn test_rotate_i_vertical() {
        let r = PieceKind::I.shape().rotate();
        assert_eq!((r.width(), r.height()), (1, 4));
    }

    #[test]
    fn test_four_rotations_identity() {
        for kind in PieceKind::ALL {
            let piece = kind.shape();
            let back = piece.rotate().rotate().rotate().rotate();
            assert_eq!(back, piece);
        }
    }

    #[test]
    fn test_from_rows_requires_filled_cell() {
        assert_eq!(
            Piece::from_rows(&[[0u8, 0], [0, 0]]),
            Err(GridError::NoFilledCells)
        );
        let empty: [[u8; 0]; 0] = [];
        assert_eq!(Piece::from_rows(&empty), Err(GridError::Empty));
    }

    #[test]
    fn test_filled_cells_offsets() {
        let cells: Vec<_> = PieceKind::S.shape().filled_cells().collect();
        assert_eq!(cells, vec![(1, 0, 3), (2, 0, 3), (0, 1, 3), (1, 1, 3)]);
    }
}
