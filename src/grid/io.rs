//! Convenience helpers for loading grids via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::grid::extract::extract_grid;
use crate::grid::{GridView, IntensityGrid};
use crate::util::{BlockMatchError, BlockMatchResult};
use std::path::Path;

/// Creates a borrowed grid view over a grayscale image buffer.
pub fn view_from_gray_image(img: &image::GrayImage) -> BlockMatchResult<GridView<'_>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    GridView::from_slice(img.as_raw(), width, height)
}

/// Extracts an owned intensity grid from a grayscale image buffer.
pub fn grid_from_gray_image(img: &image::GrayImage) -> BlockMatchResult<IntensityGrid> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    extract_grid(img.as_raw(), width, height, 1, 0)
}

/// Converts any dynamic image to grayscale and extracts its grid.
pub fn grid_from_dynamic_image(img: &image::DynamicImage) -> BlockMatchResult<IntensityGrid> {
    let gray = img.to_luma8();
    grid_from_gray_image(&gray)
}

/// Loads an image from disk and converts it to an intensity grid.
pub fn load_gray_grid<P: AsRef<Path>>(path: P) -> BlockMatchResult<IntensityGrid> {
    let img = image::open(path).map_err(|err| BlockMatchError::ImageIo {
        reason: err.to_string(),
    })?;
    grid_from_dynamic_image(&img)
}
