//! Search entry points for locating template matches.
//!
//! The scan module provides the exhaustive placement sweep; batch wraps
//! it for multi-template workloads.

pub(crate) mod batch;
pub(crate) mod scan;

use crate::candidate::topk::Candidate;
use crate::grid::GridView;
use crate::util::BlockMatchResult;

/// Dissimilarity metric used to score a placement.
///
/// Both metrics accumulate exactly over integer pixel values; zero means
/// the window equals the template pixel for pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Metric {
    /// Sum of absolute differences.
    #[default]
    Sad,
    /// Sum of squared differences, which penalizes outlier pixels harder.
    Ssd,
}

/// Ranks the `k` best SAD placements of `template` over `subject`.
pub fn match_template(
    subject: GridView<'_>,
    template: GridView<'_>,
    k: usize,
) -> BlockMatchResult<Vec<Candidate>> {
    scan::scan_full(subject, template, k, Metric::Sad)
}

/// Ranks the `k` best placements under an explicit metric.
pub fn match_template_with(
    subject: GridView<'_>,
    template: GridView<'_>,
    k: usize,
    metric: Metric,
) -> BlockMatchResult<Vec<Candidate>> {
    scan::scan_full(subject, template, k, metric)
}

/// Returns the single best placement under `metric`.
pub fn best_match(
    subject: GridView<'_>,
    template: GridView<'_>,
    metric: Metric,
) -> BlockMatchResult<Candidate> {
    let mut ranked = scan::scan_full(subject, template, 1, metric)?;
    Ok(ranked
        .pop()
        .expect("a validated scan holds at least one placement"))
}
