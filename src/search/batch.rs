//! Batch matching of several templates against one subject.

use crate::candidate::topk::Candidate;
use crate::grid::GridView;
use crate::search::scan::scan_full;
use crate::search::Metric;
use crate::trace::{trace_event, trace_span};
use crate::util::BlockMatchResult;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Matches each template against `subject` in turn.
///
/// Returns one ranked candidate list per template, in input order. The
/// first template that fails validation aborts the batch.
pub fn match_templates(
    subject: GridView<'_>,
    templates: &[GridView<'_>],
    k: usize,
    metric: Metric,
) -> BlockMatchResult<Vec<Vec<Candidate>>> {
    let _span = trace_span!("match_batch", templates = templates.len(), k = k).entered();

    let mut out = Vec::with_capacity(templates.len());
    for &template in templates {
        out.push(scan_full(subject, template, k, metric)?);
    }

    trace_event!("batch_done", templates = out.len());
    Ok(out)
}

/// Template-parallel variant of [`match_templates`].
///
/// Each template scan is independent, so results are identical to the
/// serial batch, in input order.
#[cfg(feature = "rayon")]
pub fn match_templates_par(
    subject: GridView<'_>,
    templates: &[GridView<'_>],
    k: usize,
    metric: Metric,
) -> BlockMatchResult<Vec<Vec<Candidate>>> {
    let _span = trace_span!(
        "match_batch",
        templates = templates.len(),
        k = k,
        parallel = true
    )
    .entered();

    let results: Vec<_> = templates
        .par_iter()
        .map(|&template| scan_full(subject, template, k, metric))
        .collect();

    let mut out = Vec::with_capacity(results.len());
    for result in results {
        out.push(result?);
    }

    trace_event!("batch_done", templates = out.len());
    Ok(out)
}
