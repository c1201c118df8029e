//! Batching query engine.
//!
//! Cisco's Support endpoints accept multiple identifiers per call but cap
//! the count (20 product IDs for EoX, 75 serial numbers for SN2Info). The
//! engine deduplicates the caller's identifier list, partitions it into
//! groups of at most `batch_size`, and runs one fetch per group, strictly
//! sequentially. Group results are concatenated in partition order.
//!
//! A failing fetch aborts the whole query: prior group results are
//! discarded and the error propagates. Partial results are never returned.

use std::collections::HashSet;

use eoxide_core::Record;
use tracing::debug;

/// Runs `fetch` once per deduplicated batch of identifiers and merges the
/// results.
///
/// Identifiers are deduplicated preserving first-seen order, then split
/// into consecutive groups of at most `batch_size`. Each group's fetch is
/// awaited before the next begins; there is never more than one request
/// in flight.
///
/// An empty identifier list returns an empty result without invoking
/// `fetch` at all.
///
/// # Errors
///
/// The first fetch error aborts the remaining batches and is returned
/// as-is; results from already-completed batches are discarded.
///
/// # Panics
///
/// Panics if `batch_size` is zero.
pub async fn batch_query<F, E>(
    identifiers: &[String],
    batch_size: usize,
    mut fetch: F,
) -> Result<Vec<Record>, E>
where
    F: AsyncFnMut(Vec<String>) -> Result<Vec<Record>, E>,
{
    assert!(batch_size > 0, "batch_size must be non-zero");

    let unique = dedup_preserving_order(identifiers);
    if unique.is_empty() {
        return Ok(Vec::new());
    }

    let batches = partition_into_batches(unique, batch_size);
    debug!(
        identifiers = identifiers.len(),
        batches = batches.len(),
        batch_size,
        "Running batched query"
    );

    let mut records = Vec::new();
    for batch in batches {
        let mut batch_records = fetch(batch).await?;
        records.append(&mut batch_records);
    }

    Ok(records)
}

/// Removes duplicate identifiers, keeping the first occurrence of each.
///
/// Order is irrelevant to correctness but keeping it deterministic makes
/// batch composition testable.
pub fn dedup_preserving_order(identifiers: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    identifiers
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}

/// Splits identifiers into consecutive groups of at most `batch_size`.
pub fn partition_into_batches(identifiers: Vec<String>, batch_size: usize) -> Vec<Vec<String>> {
    identifiers
        .chunks(batch_size)
        .map(<[String]>::to_vec)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use serde_json::json;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    fn record_for(id: &str) -> Record {
        let mut record = Record::new();
        record.insert("id", json!(id));
        record
    }

    #[tokio::test]
    async fn test_dedup_then_partition_order() {
        let input = ids(&["A", "A", "B", "C"]);
        let mut calls: Vec<Vec<String>> = Vec::new();

        let result = batch_query(&input, 2, async |group| {
            calls.push(group.clone());
            Ok::<_, FetchError>(group.iter().map(|id| record_for(id)).collect())
        })
        .await
        .unwrap();

        assert_eq!(calls, vec![ids(&["A", "B"]), ids(&["C"])]);
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].get_str("id"), Some("A"));
        assert_eq!(result[2].get_str("id"), Some("C"));
    }

    #[tokio::test]
    async fn test_single_call_when_under_batch_size() {
        let input = ids(&["X", "Y", "Z"]);
        let mut calls = 0usize;

        batch_query(&input, 75, async |group| {
            calls += 1;
            assert_eq!(group, ids(&["X", "Y", "Z"]));
            Ok::<_, FetchError>(Vec::new())
        })
        .await
        .unwrap();

        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_empty_input_makes_no_calls() {
        let mut calls = 0usize;

        let result = batch_query(&[], 20, async |_group| {
            calls += 1;
            Ok::<_, FetchError>(Vec::new())
        })
        .await
        .unwrap();

        assert!(result.is_empty());
        assert_eq!(calls, 0);
    }

    #[tokio::test]
    async fn test_union_of_groups_equals_input_set() {
        let input = ids(&["a", "b", "a", "c", "d", "b", "e", "e", "f"]);
        let mut fetched: Vec<String> = Vec::new();

        batch_query(&input, 2, async |group| {
            fetched.extend(group);
            Ok::<_, FetchError>(Vec::new())
        })
        .await
        .unwrap();

        let expected: HashSet<&str> = input.iter().map(String::as_str).collect();
        let actual: HashSet<&str> = fetched.iter().map(String::as_str).collect();
        assert_eq!(actual, expected);
        // Dedup means no identifier is fetched twice.
        assert_eq!(fetched.len(), expected.len());
    }

    #[tokio::test]
    async fn test_failing_fetch_aborts_without_partial_results() {
        let input = ids(&["A", "B", "C", "D"]);
        let mut calls = 0usize;

        let result = batch_query(&input, 2, async |group| {
            calls += 1;
            if calls == 2 {
                Err(FetchError::InvalidResponse("boom".to_string()))
            } else {
                Ok(group.iter().map(|id| record_for(id)).collect())
            }
        })
        .await;

        assert!(result.is_err());
        // Second batch failed; the third was never attempted.
        assert_eq!(calls, 2);
    }

    #[tokio::test]
    #[should_panic(expected = "batch_size must be non-zero")]
    async fn test_zero_batch_size_panics() {
        let input = ids(&["A"]);
        let _ = batch_query(&input, 0, async |_group| Ok::<_, FetchError>(Vec::new())).await;
    }

    #[test]
    fn test_dedup_preserving_order() {
        let input = ids(&["b", "a", "b", "c", "a"]);
        assert_eq!(dedup_preserving_order(&input), ids(&["b", "a", "c"]));
    }

    #[test]
    fn test_partition_into_batches() {
        let batches = partition_into_batches(ids(&["1", "2", "3", "4", "5"]), 2);
        assert_eq!(
            batches,
            vec![ids(&["1", "2"]), ids(&["3", "4"]), ids(&["5"])]
        );
    }
}
