use core::future::Future;

use crate::timeseries::merge::merge_partials;
use crate::timeseries::split::split_range;
use crate::{
    HackairError, Measurement, PartialResult, Reading, SeriesKind, SplitConfig, TimeRange,
};

/// Outcome of one sub-range fetch, tagged with its partition index.
pub type IndexedOutcome = (usize, Result<PartialResult, HackairError>);

/// Fetch a pollutant series over `window`, one call of `fetch_one` per sub-range.
///
/// Behavior:
/// - `window` is partitioned with [`split_range`] using `cfg`; an oversized
///   window fails before any call is made.
/// - All calls are polled concurrently and the function returns only after
///   every one of them has completed or failed.
/// - Each response is filtered to `kind` and sorted by timestamp.
/// - An embedded remote status error degrades to an empty slice for that range.
/// - Any other failure fails the whole call; with several failures, the one
///   from the lowest partition index is returned.
/// - Results are reassembled in partition order regardless of completion order.
///
/// Dropping the returned future abandons every in-flight call.
///
/// # Errors
/// See above: split errors, transport failures, and malformed payloads.
pub async fn fetch_partitioned<F, Fut>(
    kind: SeriesKind,
    window: TimeRange,
    cfg: &SplitConfig,
    fetch_one: F,
) -> Result<Vec<Measurement>, HackairError>
where
    F: Fn(TimeRange) -> Fut,
    Fut: Future<Output = Result<Vec<Reading>, HackairError>>,
{
    let partition = split_range(window.start, window.end, cfg)?;
    let tasks = partition.into_iter().enumerate().map(|(index, range)| {
        let fut = fetch_one(range);
        async move {
            let outcome = match fut.await {
                Ok(readings) => PartialResult::from_readings(index, kind, &readings),
                Err(HackairError::RemoteStatus { code, message }) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        %range,
                        index,
                        code,
                        remote_message = %message,
                        "remote status error; treating sub-range as empty"
                    );
                    #[cfg(not(feature = "tracing"))]
                    let _ = (range, code, message);
                    Ok(PartialResult::empty(index))
                }
                Err(e) => Err(e),
            };
            (index, outcome)
        }
    });
    let joined = futures::future::join_all(tasks).await;
    collect_partials(joined)
}

/// Order outcomes by partition index, fail on the first error, and merge the rest.
///
/// # Errors
/// Returns the error with the lowest partition index, if any.
pub fn collect_partials(
    mut joined: Vec<IndexedOutcome>,
) -> Result<Vec<Measurement>, HackairError> {
    joined.sort_by_key(|(index, _)| *index);
    let mut partials = Vec::with_capacity(joined.len());
    for (_, outcome) in joined {
        partials.push(outcome?);
    }
    Ok(merge_partials(partials))
}
