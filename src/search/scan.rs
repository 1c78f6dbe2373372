//! Exhaustive placement scan over a subject grid.

use crate::candidate::topk::{Candidate, TopK};
use crate::grid::GridView;
use crate::search::Metric;
use crate::trace::{trace_event, trace_span};
use crate::util::{BlockMatchError, BlockMatchResult};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Scans every valid placement of `template` over `subject` and returns
/// the `k` lowest-scoring candidates, ascending by score.
///
/// Every alignment in `0..=subject - template` along both axes is scored,
/// including the alignment flush with the right and bottom edges. Among
/// equal scores the candidate discovered first (row-major order) ranks
/// first, and a later candidate never displaces an earlier one it merely
/// ties.
pub fn scan_full(
    subject: GridView<'_>,
    template: GridView<'_>,
    k: usize,
    metric: Metric,
) -> BlockMatchResult<Vec<Candidate>> {
    let (max_x, max_y) = placement_range(subject, template)?;
    if k == 0 {
        return Ok(Vec::new());
    }

    let _span = trace_span!(
        "scan_full",
        sub_width = subject.width(),
        sub_height = subject.height(),
        tpl_width = template.width(),
        tpl_height = template.height(),
        k = k
    )
    .entered();

    // No more than one candidate per placement can ever be retained.
    let placements = (max_x + 1) * (max_y + 1);
    let mut ranked = TopK::new(k.min(placements));
    for y in 0..=max_y {
        for x in 0..=max_x {
            let score = placement_score(subject, template, x, y, metric);
            ranked.push(Candidate { x, y, score });
        }
    }

    let out = ranked.into_sorted_asc();
    trace_event!("scan_done", placements = placements, kept = out.len());
    Ok(out)
}

/// Row-parallel variant of [`scan_full`].
///
/// Each row of placements is scanned on its own, then the per-row
/// survivors are merged in row order. Eviction never displaces a tied
/// earlier candidate, so the result is identical to the serial scan.
#[cfg(feature = "rayon")]
pub fn scan_full_par(
    subject: GridView<'_>,
    template: GridView<'_>,
    k: usize,
    metric: Metric,
) -> BlockMatchResult<Vec<Candidate>> {
    let (max_x, max_y) = placement_range(subject, template)?;
    if k == 0 {
        return Ok(Vec::new());
    }

    let _span = trace_span!(
        "scan_full_par",
        sub_width = subject.width(),
        sub_height = subject.height(),
        tpl_width = template.width(),
        tpl_height = template.height(),
        k = k
    )
    .entered();

    let placements = (max_x + 1) * (max_y + 1);
    let row_results: Vec<Vec<Candidate>> = (0..=max_y)
        .into_par_iter()
        .map(|y| {
            let mut row_ranked = TopK::new(k.min(max_x + 1));
            for x in 0..=max_x {
                let score = placement_score(subject, template, x, y, metric);
                row_ranked.push(Candidate { x, y, score });
            }
            row_ranked.into_sorted_asc()
        })
        .collect();

    let mut ranked = TopK::new(k.min(placements));
    for row in row_results {
        for cand in row {
            ranked.push(cand);
        }
    }

    let out = ranked.into_sorted_asc();
    trace_event!("scan_done", placements = placements, kept = out.len());
    Ok(out)
}

/// Scores a single placement of `template` at `(x, y)`.
///
/// Returns `None` when the placement does not fit inside the subject.
pub fn score_at(
    subject: GridView<'_>,
    template: GridView<'_>,
    x: usize,
    y: usize,
    metric: Metric,
) -> Option<u64> {
    let (max_x, max_y) = placement_range(subject, template).ok()?;
    if x > max_x || y > max_y {
        return None;
    }
    Some(placement_score(subject, template, x, y, metric))
}

/// Validates that `template` fits inside `subject` and returns the
/// largest valid placement offsets along each axis.
fn placement_range(
    subject: GridView<'_>,
    template: GridView<'_>,
) -> BlockMatchResult<(usize, usize)> {
    let sub_width = subject.width();
    let sub_height = subject.height();
    let tpl_width = template.width();
    let tpl_height = template.height();
    if tpl_width > sub_width || tpl_height > sub_height {
        return Err(BlockMatchError::TemplateExceedsSubject {
            tpl_width,
            tpl_height,
            sub_width,
            sub_height,
        });
    }
    Ok((sub_width - tpl_width, sub_height - tpl_height))
}

/// Accumulated dissimilarity for template placement `(x, y)`.
///
/// Callers must keep the placement inside the subject. The score fits in
/// `u64` for any grid addressable with `usize` dimensions.
fn placement_score(
    subject: GridView<'_>,
    template: GridView<'_>,
    x: usize,
    y: usize,
    metric: Metric,
) -> u64 {
    let tpl_width = template.width();
    let tpl_height = template.height();

    let mut total = 0u64;
    for ty in 0..tpl_height {
        let sub_row = subject.row(y + ty).expect("row within bounds for scan");
        let tpl_row = template.row(ty).expect("template row within bounds");
        let window = &sub_row[x..x + tpl_width];
        total += match metric {
            Metric::Sad => sad_row(window, tpl_row),
            Metric::Ssd => ssd_row(window, tpl_row),
        };
    }
    total
}

fn sad_row(window: &[u8], tpl_row: &[u8]) -> u64 {
    window
        .iter()
        .zip(tpl_row)
        .map(|(&s, &t)| u64::from(s.abs_diff(t)))
        .sum()
}

fn ssd_row(window: &[u8], tpl_row: &[u8]) -> u64 {
    window
        .iter()
        .zip(tpl_row)
        .map(|(&s, &t)| {
            let d = u64::from(s.abs_diff(t));
            d * d
        })
        .sum()
}
