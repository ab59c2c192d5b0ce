/// Maps a logical sample position to its storage cell. Storage carries a
/// one-cell zero border on every side, so logical `(0, 0)` lives at `(1, 1)`.
pub const fn to_storage_index(x: usize, y: usize) -> (usize, usize) {
    (x + 1, y + 1)
}

/// Integer height samples on a `data_width x data_height` grid.
///
/// Storage is `(data_width + 2) x (data_height + 2)` cells; the outer ring is
/// always zero so edge quads need no special handling. Nothing that takes a
/// logical index can reach the border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightField {
    data_width: usize,
    data_height: usize,
    cells: Vec<i32>,
}

impl HeightField {
    pub fn new(data_width: usize, data_height: usize) -> Self {
        Self {
            data_width,
            data_height,
            cells: vec![0; (data_width + 2) * (data_height + 2)],
        }
    }

    pub fn data_width(&self) -> usize {
        self.data_width
    }

    pub fn data_height(&self) -> usize {
        self.data_height
    }

    pub fn storage_width(&self) -> usize {
        self.data_width + 2
    }

    pub fn storage_height(&self) -> usize {
        self.data_height + 2
    }

    /// Height at a storage cell, border included.
    pub fn stored(&self, i: usize, j: usize) -> i32 {
        self.cells[j * self.storage_width() + i]
    }

    /// Height at a logical position.
    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.assert_logical(x, y);
        let (i, j) = to_storage_index(x, y);
        self.stored(i, j)
    }

    pub fn set_point(&mut self, x: usize, y: usize, value: i32) {
        self.assert_logical(x, y);
        let (i, j) = to_storage_index(x, y);
        let idx = j * self.storage_width() + i;
        self.cells[idx] = value;
    }

    /// Overwrites logical row `y`. `samples` must hold exactly `data_width`
    /// values.
    pub fn set_row(&mut self, y: usize, samples: &[i32]) {
        assert!(
            y < self.data_height,
            "row {y} out of range (data height {})",
            self.data_height
        );
        assert_eq!(
            samples.len(),
            self.data_width,
            "row length must match data width"
        );
        let (i, j) = to_storage_index(0, y);
        let start = j * self.storage_width() + i;
        self.cells[start..start + self.data_width].copy_from_slice(samples);
    }

    /// Logical row `y` as a slice of `data_width` samples.
    pub fn row(&self, y: usize) -> &[i32] {
        assert!(
            y < self.data_height,
            "row {y} out of range (data height {})",
            self.data_height
        );
        let (i, j) = to_storage_index(0, y);
        let start = j * self.storage_width() + i;
        &self.cells[start..start + self.data_width]
    }

    /// Shifts every row one step towards row 0, dropping row 0, and writes
    /// `samples` into the last row.
    pub fn scroll_in_row(&mut self, samples: &[i32]) {
        assert_eq!(
            samples.len(),
            self.data_width,
            "row length must match data width"
        );
        for y in 1..self.data_height {
            let (i, src_j) = to_storage_index(0, y);
            let src = src_j * self.storage_width() + i;
            let dst = src - self.storage_width();
            self.cells.copy_within(src..src + self.data_width, dst);
        }
        if self.data_height > 0 {
            self.set_row(self.data_height - 1, samples);
        }
    }

    /// Resets every sample to zero.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Reallocates for new logical dimensions. Existing samples are dropped.
    pub fn resize(&mut self, data_width: usize, data_height: usize) {
        *self = HeightField::new(data_width, data_height);
    }

    fn assert_logical(&self, x: usize, y: usize) {
        assert!(
            x < self.data_width && y < self.data_height,
            "sample ({x}, {y}) out of range ({} x {})",
            self.data_width,
            self.data_height
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_moves_rows_towards_zero() {
        let mut field = HeightField::new(2, 3);
        field.set_row(0, &[1, 1]);
        field.set_row(1, &[2, 2]);
        field.set_row(2, &[3, 3]);
        field.scroll_in_row(&[4, 5]);
        assert_eq!(field.row(0), &[2, 2]);
        assert_eq!(field.row(1), &[3, 3]);
        assert_eq!(field.row(2), &[4, 5]);
    }

    #[test]
    fn storage_index_offsets_by_border() {
        assert_eq!(to_storage_index(0, 0), (1, 1));
        assert_eq!(to_storage_index(4, 7), (5, 8));
    }
}
