//! Dense 2-D blocks of cell values and the rotate/flip transforms applied to them.

use super::host::BLANK;

/// A rectangular block of cell values stored row-major, top-to-bottom then left-to-right.
///
/// A block is never empty: both dimensions are at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellBlock {
    width: usize,
    height: usize,
    cells: Vec<i32>,
}

impl CellBlock {
    /// Build a block from rows. Returns `None` for an empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }

        Some(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// A `width` x `height` block with every cell blank
    pub fn blank(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![BLANK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn set(&mut self, x: usize, y: usize, value: i32) {
        let index = y * self.width + x;
        self.cells[index] = value;
    }

    /// Iterate `(x, y, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, i32)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, value)| (i % width, i / width, *value))
    }

    /// Copy the block back out as nested rows
    #[cfg(test)]
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.cells
            .chunks(self.width)
            .map(|row| row.to_vec())
            .collect()
    }
}

/// Rotate a block a quarter turn clockwise: an H x W block becomes W x H with
/// `out[x][h - 1 - y] = data[y][x]`.
pub fn rotate90(data: &CellBlock) -> CellBlock {
    let h = data.height;
    let mut out = CellBlock::blank(h, data.width);
    for (x, y, value) in data.iter() {
        out.set(h - 1 - y, x, value);
    }
    out
}

/// Rotate clockwise by `steps` quarter turns (taken mod 4)
pub fn rotate(data: &CellBlock, steps: u8) -> CellBlock {
    let mut out = data.clone();
    for _ in 0..steps % 4 {
        out = rotate90(&out);
    }
    out
}

/// Mirror each row: `out[y][w - 1 - x] = data[y][x]`
pub fn flip_horizontal(data: &CellBlock) -> CellBlock {
    let w = data.width;
    let mut out = CellBlock::blank(w, data.height);
    for (x, y, value) in data.iter() {
        out.set(w - 1 - x, y, value);
    }
    out
}

/// Orient `base` by `rotate_step` clockwise quarter turns, then mirror if `flip` is set.
///
/// Always derived from the untransformed base so repeated toggling never accumulates.
pub fn compose(base: &CellBlock, rotate_step: u8, flip: bool) -> CellBlock {
    let rotated = rotate(base, rotate_step);
    if flip {
        flip_horizontal(&rotated)
    } else {
        rotated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(rows: &[&[i32]]) -> CellBlock {
        CellBlock::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_from_rows_rejects_empty_and_ragged() {
        assert!(CellBlock::from_rows(vec![]).is_none());
        assert!(CellBlock::from_rows(vec![vec![]]).is_none());
        assert!(CellBlock::from_rows(vec![vec![1, 2], vec![3]]).is_none());
    }

    #[test]
    fn test_iter_is_row_major() {
        let b = block(&[&[1, 2], &[3, 4]]);
        let order: Vec<_> = b.iter().collect();
        assert_eq!(order, vec![(0, 0, 1), (1, 0, 2), (0, 1, 3), (1, 1, 4)]);
    }

    #[test]
    fn test_rotate90_is_clockwise() {
        // 2 rows x 3 columns
        let b = block(&[&[1, 2, 3], &[4, 5, 6]]);
        let r = rotate90(&b);
        assert_eq!(r.width(), 2);
        assert_eq!(r.height(), 3);
        assert_eq!(r.to_rows(), vec![vec![4, 1], vec![5, 2], vec![6, 3]]);
    }

    #[test]
    fn test_rotate90_four_times_is_identity() {
        let shapes = [
            block(&[&[7]]),
            block(&[&[1, 2, 3]]),
            block(&[&[1], &[2], &[3]]),
            block(&[&[1, 2, 3], &[4, 5, 6]]),
            block(&[&[1, -1, 3], &[4, 5, -2], &[0, 8, 9]]),
        ];
        for b in shapes {
            let mut r = b.clone();
            for _ in 0..4 {
                r = rotate90(&r);
            }
            assert_eq!(r, b);
        }
    }

    #[test]
    fn test_rotate_steps_wrap_mod_four() {
        let b = block(&[&[1, 2, 3], &[4, 5, 6]]);
        assert_eq!(rotate(&b, 4), b);
        assert_eq!(rotate(&b, 5), rotate90(&b));
        assert_eq!(rotate(&b, 2).to_rows(), vec![vec![6, 5, 4], vec![3, 2, 1]]);
    }

    #[test]
    fn test_flip_horizontal() {
        let b = block(&[&[1, 2, 3], &[4, 5, 6]]);
        let f = flip_horizontal(&b);
        assert_eq!(f.to_rows(), vec![vec![3, 2, 1], vec![6, 5, 4]]);
        assert_eq!(flip_horizontal(&f), b);
    }

    #[test]
    fn test_compose_rotates_before_flipping() {
        let b = block(&[&[1, 2, 3], &[4, 5, 6]]);
        let c = compose(&b, 1, true);
        // rotate: [[4,1],[5,2],[6,3]] then mirror rows
        assert_eq!(c.to_rows(), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
    }

    #[test]
    fn test_compose_identity() {
        let b = block(&[&[1, 2], &[3, 4]]);
        assert_eq!(compose(&b, 0, false), b);
    }
}
