//! board representation - row-major cell tags, row 0 is the top
//! boards are values: placement clones, nothing is shared between branches

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{BoardWithHeights, GridError};

/// Flatten a rectangular grid into row-major cells.
/// Returns `(width, height, cells)`.
pub(crate) fn flatten_rows<R: AsRef<[u8]>>(
    rows: &[R],
) -> Result<(usize, usize, Vec<u8>), GridError> {
    let width = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);
    if width == 0 {
        return Err(GridError::Empty);
    }
    let mut cells = Vec::with_capacity(width * rows.len());
    for (y, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != width {
            return Err(GridError::Ragged {
                row: y,
                expected: width,
                found: row.len(),
            });
        }
        cells.extend_from_slice(row);
    }
    Ok((width, rows.len(), cells))
}

/// Playing field of `width x height` cell tags.
/// 0 is empty, any other value is occupied. Row 0 is the top row,
/// row `height - 1` rests on the floor.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Board {
    pub const DEFAULT_WIDTH: usize = 10;
    pub const DEFAULT_HEIGHT: usize = 20;

    /// Empty board. Dimensions of zero are clamped to one.
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Build a board from rows, rejecting empty and ragged grids.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let (width, height, cells) = flatten_rows(rows)?;
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

    #[inline(always)]
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        self.get(x, y) != 0
    }

    #[inline(always)]
    pub fn set(&mut self, x: usize, y: usize, tag: u8) {
        self.cells[y * self.width + x] = tag;
    }

    /// Raw row slice
    pub fn row(&self, y: usize) -> &[u8] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width)
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).iter().all(|&cell| cell != 0)
    }

    /// Remove every full row, shifting the rows above down and
    /// inserting empty rows at the top. Returns the number removed.
    pub fn clear_lines(&mut self) -> u32 {
        let mut cleared = 0u32;
        let mut y = self.height;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                // rows [0, row) slide down by one, row 0 becomes empty.
                // y stays put so the row that slid in is checked too
                self.cells.copy_within(0..row * self.width, self.width);
                self.cells[..self.width].fill(0);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Distance from the topmost filled cell of `column` to the floor.
    pub fn height_at(&self, column: usize) -> u32 {
        (0..self.height)
            .find(|&y| self.is_filled(column, y))
            .map(|y| (self.height - y) as u32)
            .unwrap_or(0)
    }

    pub fn column_heights(&self) -> Vec<u32> {
        (0..self.width).map(|x| self.height_at(x)).collect()
    }

    pub fn aggregate_height(&self) -> u32 {
        BoardWithHeights::new(self).aggregate_height()
    }

    /// Empty cells covered by at least one filled cell in the same column.
    pub fn count_holes(&self) -> u32 {
        let mut holes = 0u32;
        for x in 0..self.width {
            let mut found_block = false;
            for y in 0..self.height {
                if self.is_filled(x, y) {
                    found_block = true;
                } else if found_block {
                    holes += 1;
                }
            }
        }
        holes
    }

    pub fn bumpiness(&self) -> u32 {
        BoardWithHeights::new(self).bumpiness()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.rows())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: Vec<Vec<u8>> = Vec::deserialize(deserializer)?;
        Board::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for &cell in row {
                write!(f, "{}", if cell != 0 { "[]" } else { "  " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
