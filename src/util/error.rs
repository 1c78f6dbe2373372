//! Error types for blockmatch.

use thiserror::Error;

/// Result alias for blockmatch operations.
pub type BlockMatchResult<T> = std::result::Result<T, BlockMatchError>;

/// Errors raised while building grids or running a search.
///
/// Every variant is fatal to the operation that raised it: a malformed input
/// makes the whole computation meaningless, so nothing is retried and no
/// partial result is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockMatchError {
    /// Grid dimensions are zero or overflow the address space.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Literal row data is not rectangular.
    #[error("row {row} has {got} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// A buffer or sample stream holds fewer values than the declared
    /// geometry requires.
    #[error("buffer too small: needed {needed} values, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// The requested channel does not exist in the sample layout.
    #[error("channel {channel} out of range for {samples_per_pixel} samples per pixel")]
    ChannelOutOfRange {
        channel: usize,
        samples_per_pixel: usize,
    },
    /// An upstream decoder delivered pixels out of row-major order.
    #[error(
        "pixel traversal out of row-major order: expected ({expected_x}, {expected_y}), got ({x}, {y})"
    )]
    InconsistentTraversal {
        expected_x: usize,
        expected_y: usize,
        x: usize,
        y: usize,
    },
    /// The template is larger than the subject on at least one axis.
    #[error("template {tpl_width}x{tpl_height} does not fit in subject {sub_width}x{sub_height}")]
    TemplateExceedsSubject {
        tpl_width: usize,
        tpl_height: usize,
        sub_width: usize,
        sub_height: usize,
    },
    /// Image decoding or conversion failed.
    #[cfg(feature = "image-io")]
    #[error("image i/o failed: {reason}")]
    ImageIo { reason: String },
}
