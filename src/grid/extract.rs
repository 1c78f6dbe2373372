//! Grid extraction from raw pixel sample buffers.
//!
//! A decoded image arrives either as an interleaved sample buffer
//! ([`extract_grid`]) or as a decoder-driven stream of coordinate-tagged
//! samples ([`grid_from_samples`]). Both paths funnel through the same
//! row-major traversal cursor, so a misbehaving upstream decoder that skips
//! or repeats a pixel is rejected at the construction boundary instead of
//! silently corrupting the search input.

use crate::grid::{checked_area, IntensityGrid};
use crate::util::{BlockMatchError, BlockMatchResult};

/// One decoded pixel sample tagged with its coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanSample {
    /// Column of the sample.
    pub x: usize,
    /// Row of the sample.
    pub y: usize,
    /// Single-channel intensity at `(x, y)`.
    pub luma: u8,
}

/// Tracks the next coordinate a row-major traversal must visit.
#[derive(Debug)]
struct Traversal {
    width: usize,
    next_x: usize,
    next_y: usize,
}

impl Traversal {
    fn new(width: usize) -> Self {
        Self {
            width,
            next_x: 0,
            next_y: 0,
        }
    }

    /// Accepts `(x, y)` only if it is the next coordinate in row-major order.
    fn advance(&mut self, x: usize, y: usize) -> BlockMatchResult<()> {
        if x != self.next_x || y != self.next_y {
            return Err(BlockMatchError::InconsistentTraversal {
                expected_x: self.next_x,
                expected_y: self.next_y,
                x,
                y,
            });
        }
        self.next_x += 1;
        if self.next_x == self.width {
            self.next_x = 0;
            self.next_y += 1;
        }
        Ok(())
    }
}

/// Builds a grid from a decoder-driven sample stream.
///
/// The stream must visit every pixel of the `width` x `height` grid exactly
/// once, row by row with `x` increasing within each row. The first
/// out-of-order sample aborts with `InconsistentTraversal`; a stream that
/// ends before covering the grid fails with `BufferTooSmall`. Samples past
/// the final pixel are left unconsumed.
pub fn grid_from_samples<I>(
    width: usize,
    height: usize,
    samples: I,
) -> BlockMatchResult<IntensityGrid>
where
    I: IntoIterator<Item = ScanSample>,
{
    let pixels = checked_area(width, height)?;
    let mut cursor = Traversal::new(width);
    let mut data = Vec::with_capacity(pixels);
    for sample in samples {
        cursor.advance(sample.x, sample.y)?;
        data.push(sample.luma);
        if data.len() == pixels {
            break;
        }
    }
    if data.len() < pixels {
        return Err(BlockMatchError::BufferTooSmall {
            needed: pixels,
            got: data.len(),
        });
    }
    IntensityGrid::from_vec(data, width, height)
}

/// Extracts one channel of an interleaved sample buffer into a grid.
///
/// `samples` holds `samples_per_pixel` consecutive values per pixel in
/// row-major pixel order (RGBA would be `samples_per_pixel = 4`). Grayscale
/// reduction leaves the same value in every color channel, so `channel` is
/// conventionally 0.
pub fn extract_grid(
    samples: &[u8],
    width: usize,
    height: usize,
    samples_per_pixel: usize,
    channel: usize,
) -> BlockMatchResult<IntensityGrid> {
    if channel >= samples_per_pixel {
        return Err(BlockMatchError::ChannelOutOfRange {
            channel,
            samples_per_pixel,
        });
    }
    let pixels = checked_area(width, height)?;
    let needed = pixels
        .checked_mul(samples_per_pixel)
        .ok_or(BlockMatchError::InvalidDimensions { width, height })?;
    if samples.len() < needed {
        return Err(BlockMatchError::BufferTooSmall {
            needed,
            got: samples.len(),
        });
    }

    let stream = (0..height).flat_map(|y| {
        (0..width).map(move |x| ScanSample {
            x,
            y,
            luma: samples[(y * width + x) * samples_per_pixel + channel],
        })
    });
    grid_from_samples(width, height, stream)
}
