//! Intensity grids and borrowed grid views.
//!
//! `IntensityGrid` owns a contiguous row-major buffer of single-channel
//! brightness values; `GridView` is the borrowed read-only form the search
//! consumes. Both enforce the rectangular, non-empty invariant at
//! construction, so downstream code can index rows without re-checking
//! geometry.

use crate::util::{BlockMatchError, BlockMatchResult};

pub mod extract;
#[cfg(feature = "image-io")]
pub mod io;
pub mod scale;

/// Borrowed read-only view of a rectangular intensity grid.
#[derive(Copy, Clone)]
pub struct GridView<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> GridView<'a> {
    /// Creates a view over a contiguous row-major buffer.
    ///
    /// The buffer may be longer than `width * height`; trailing values are
    /// ignored.
    pub fn from_slice(data: &'a [u8], width: usize, height: usize) -> BlockMatchResult<Self> {
        let needed = checked_area(width, height)?;
        if data.len() < needed {
            return Err(BlockMatchError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the grid width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the intensity at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// Returns row `y` as a contiguous slice of length `width`.
    pub fn row(&self, y: usize) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.data.get(start..start + self.width)
    }
}

/// Owned rectangular grid of intensity values.
///
/// Constructed once (by the extractor, the downscaler, or `from_rows`) and
/// read-only afterwards; the search borrows it through [`GridView`].
pub struct IntensityGrid {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl IntensityGrid {
    /// Takes ownership of a contiguous row-major buffer of exactly
    /// `width * height` values.
    pub fn from_vec(data: Vec<u8>, width: usize, height: usize) -> BlockMatchResult<Self> {
        let needed = checked_area(width, height)?;
        if data.len() < needed {
            return Err(BlockMatchError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(BlockMatchError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds a grid from literal rows, checking that every row has the same
    /// length as the first.
    pub fn from_rows(rows: &[Vec<u8>]) -> BlockMatchResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(BlockMatchError::InvalidDimensions { width, height });
        }
        let mut data = Vec::with_capacity(width * height);
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(BlockMatchError::RaggedRows {
                    row: row_idx,
                    expected: width,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(data, width, height)
    }

    /// Returns the grid width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the backing row-major buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a borrowed view of the grid.
    pub fn view(&self) -> GridView<'_> {
        GridView {
            data: &self.data,
            width: self.width,
            height: self.height,
        }
    }
}

pub(crate) fn checked_area(width: usize, height: usize) -> BlockMatchResult<usize> {
    if width == 0 || height == 0 {
        return Err(BlockMatchError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(BlockMatchError::InvalidDimensions { width, height })
}
