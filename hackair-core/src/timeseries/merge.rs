use crate::{Measurement, PartialResult};

/// Reassemble partial results into one series.
///
/// - Partials are ordered by partition index, never by arrival order.
/// - Their measurements are concatenated as-is; duplicates are preserved.
///
/// When each partial is ascending and the source ranges are disjoint and in
/// partition order, the output is ascending by timestamp.
#[must_use]
pub fn merge_partials<I>(partials: I) -> Vec<Measurement>
where
    I: IntoIterator<Item = PartialResult>,
{
    let mut partials: Vec<PartialResult> = partials.into_iter().collect();
    partials.sort_by_key(|p| p.index);

    let total = partials.iter().map(|p| p.measurements.len()).sum();
    let mut out = Vec::with_capacity(total);
    for p in partials {
        out.extend(p.measurements);
    }
    out
}
