use crate::error::GridError;
use serde::Serialize;

/// Row-major grid of escape counts with a fixed `rows x cols` shape.
///
/// The caller allocates the grid; kernels only overwrite its contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EscapeGrid {
    rows: usize,
    cols: usize,
    counts: Vec<u32>,
}

impl EscapeGrid {
    /// Allocate a zeroed grid. Both dimensions must be at least 1.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            counts: vec![0; rows * cols],
        })
    }

    /// Build a grid from nested rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || cols == 0 {
            return Err(GridError::Empty {
                rows: rows.len(),
                cols,
            });
        }

        let mut counts = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(GridError::RaggedRows {
                    row,
                    expected: cols,
                    actual: values.len(),
                });
            }
            counts.extend_from_slice(values);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            counts,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.rows && col < self.cols {
            Some(self.counts[row * self.cols + col])
        } else {
            None
        }
    }

    /// Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[u32] {
        let start = row * self.cols;
        &self.counts[start..start + self.cols]
    }

    /// Panics if `row` is out of range.
    pub fn row_mut(&mut self, row: usize) -> &mut [u32] {
        let start = row * self.cols;
        &mut self.counts[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[u32]> {
        self.counts.chunks_exact(self.cols)
    }

    pub fn iter_rows_mut(&mut self) -> impl Iterator<Item = &mut [u32]> {
        self.counts.chunks_exact_mut(self.cols)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }

    pub fn into_rows(self) -> Vec<Vec<u32>> {
        self.counts
            .chunks_exact(self.cols)
            .map(<[u32]>::to_vec)
            .collect()
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Pixels whose count reached `limit` (never escaped within the cap).
    pub fn interior_count(&self, limit: u32) -> usize {
        self.counts.iter().filter(|&&n| n >= limit).count()
    }

    /// One bucket per count in `0..=limit`, stopping at the largest count in
    /// the grid. Counts above `limit` land in the last bucket.
    pub fn histogram(&self, limit: u32) -> Vec<u64> {
        let top = self.max_count().min(limit);
        let mut buckets = vec![0u64; top as usize + 1];
        for &n in &self.counts {
            buckets[n.min(top) as usize] += 1;
        }
        buckets
    }

    /// First pixel where two same-shaped grids differ, as
    /// `(row, col, self_count, other_count)`.
    pub fn first_mismatch(
        &self,
        other: &EscapeGrid,
    ) -> Result<Option<(usize, usize, u32, u32)>, GridError> {
        if self.shape() != other.shape() {
            return Err(GridError::ShapeMismatch {
                expected: self.shape(),
                actual: other.shape(),
            });
        }

        Ok(self
            .counts
            .iter()
            .zip(&other.counts)
            .position(|(a, b)| a != b)
            .map(|idx| {
                (
                    idx / self.cols,
                    idx % self.cols,
                    self.counts[idx],
                    other.counts[idx],
                )
            }))
    }
}
