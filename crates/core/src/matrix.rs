//! Small boolean occupancy matrices used to describe piece shapes.

/// Largest matrix side in the catalog (the I piece).
pub const MAX_SIDE: usize = 4;

/// A `rows x cols` boolean grid, at most 4x4, stored inline.
///
/// Entries outside `rows x cols` are always `false`, so two matrices compare
/// equal exactly when their dimensions and occupied cells match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_SIDE]; MAX_SIDE],
}

impl ShapeMatrix {
    /// Square matrix from 0/1 rows. Usable in constant tables.
    pub const fn square<const N: usize>(rows: [[u8; N]; N]) -> Self {
        assert!(N <= MAX_SIDE);
        let mut bits = [[false; MAX_SIDE]; MAX_SIDE];
        let mut i = 0;
        while i < N {
            let mut j = 0;
            while j < N {
                bits[i][j] = rows[i][j] != 0;
                j += 1;
            }
            i += 1;
        }
        Self {
            rows: N as u8,
            cols: N as u8,
            bits,
        }
    }

    /// Matrix from boolean rows of equal length. `None` for ragged, empty or
    /// oversized input.
    pub fn from_rows(rows: &[&[bool]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if height == 0 || width == 0 || height > MAX_SIDE || width > MAX_SIDE {
            return None;
        }
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }
        let mut bits = [[false; MAX_SIDE]; MAX_SIDE];
        for (i, row) in rows.iter().enumerate() {
            bits[i][..width].copy_from_slice(row);
        }
        Some(Self {
            rows: height as u8,
            cols: width as u8,
            bits,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    pub fn get(&self, i: usize, j: usize) -> bool {
        i < self.rows() && j < self.cols() && self.bits[i][j]
    }

    /// Occupied `(i, j)` entries in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows()).flat_map(move |i| {
            (0..self.cols()).filter_map(move |j| self.bits[i][j].then_some((i, j)))
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    /// Rows holding at least one occupied entry.
    pub fn occupied_rows(&self) -> usize {
        (0..self.rows())
            .filter(|&i| self.bits[i][..self.cols()].iter().any(|&b| b))
            .count()
    }

    /// Quarter turn clockwise: `(i, j)` of an `n x m` matrix lands on
    /// `(j, n - 1 - i)` of the `m x n` result.
    pub fn rotate_cw(&self) -> Self {
        let n = self.rows();
        let mut bits = [[false; MAX_SIDE]; MAX_SIDE];
        for (i, j) in self.occupied() {
            bits[j][n - 1 - i] = true;
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }

    /// Bounding box of the occupied entries, or `None` when nothing is set.
    pub fn trimmed(&self) -> Option<Self> {
        let (mut top, mut left) = (usize::MAX, usize::MAX);
        let (mut bottom, mut right) = (0, 0);
        for (i, j) in self.occupied() {
            top = top.min(i);
            bottom = bottom.max(i);
            left = left.min(j);
            right = right.max(j);
        }
        if top == usize::MAX {
            return None;
        }

        let mut bits = [[false; MAX_SIDE]; MAX_SIDE];
        for i in top..=bottom {
            for j in left..=right {
                bits[i - top][j - left] = self.bits[i][j];
            }
        }
        Some(Self {
            rows: (bottom - top + 1) as u8,
            cols: (right - left + 1) as u8,
            bits,
        })
    }
}
