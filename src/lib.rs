//! BlockMatch is a CPU-first exhaustive template matcher over intensity
//! grids.
//!
//! The crate scores every placement of a template inside a subject with
//! integer SAD or SSD and keeps the top-K candidates in a bounded buffer,
//! with optional parallelism via the `rayon` feature. Grid construction
//! validates geometry and traversal order up front, so the scan itself
//! runs without per-pixel checks.

mod candidate;
pub mod grid;
pub mod search;
pub mod util;

pub(crate) mod trace;

pub use grid::extract::{extract_grid, grid_from_samples, ScanSample};
pub use grid::scale::downscale_half;
pub use grid::{GridView, IntensityGrid};
pub use util::{BlockMatchError, BlockMatchResult};

pub use candidate::topk::{Candidate, TopK};
pub use search::batch::match_templates;
pub use search::scan::{scan_full, score_at};
pub use search::{best_match, match_template, match_template_with, Metric};

#[cfg(feature = "rayon")]
pub use search::batch::match_templates_par;
#[cfg(feature = "rayon")]
pub use search::scan::scan_full_par;

#[cfg(feature = "image-io")]
pub use grid::io::{
    grid_from_dynamic_image, grid_from_gray_image, load_gray_grid, view_from_gray_image,
};
