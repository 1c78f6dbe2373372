//! Integer 2:1 downscale for intensity grids.
//!
//! Screen captures are typically halved before matching to cut scan cost.
//! Each output pixel is the rounded mean of a 2x2 source block,
//! `((a + b + c + d) + 2) / 4`, with the last row/column replicated when a
//! dimension is odd, so an `n`-pixel axis shrinks to `ceil(n / 2)`.

use crate::grid::{GridView, IntensityGrid};
use crate::util::BlockMatchResult;

/// Downscales a grid by two along both axes.
pub fn downscale_half(src: GridView<'_>) -> BlockMatchResult<IntensityGrid> {
    let src_width = src.width();
    let src_height = src.height();
    let dst_width = src_width.div_ceil(2);
    let dst_height = src_height.div_ceil(2);

    let mut data = Vec::with_capacity(dst_width * dst_height);
    for y in 0..dst_height {
        let y0 = 2 * y;
        let y1 = (y0 + 1).min(src_height - 1);
        let row0 = src.row(y0).expect("source row within bounds");
        let row1 = src.row(y1).expect("source row within bounds");
        for x in 0..dst_width {
            let x0 = 2 * x;
            let x1 = (x0 + 1).min(src_width - 1);
            let sum = u16::from(row0[x0])
                + u16::from(row0[x1])
                + u16::from(row1[x0])
                + u16::from(row1[x1]);
            data.push(((sum + 2) / 4) as u8);
        }
    }
    IntensityGrid::from_vec(data, dst_width, dst_height)
}
