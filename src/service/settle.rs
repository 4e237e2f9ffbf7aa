//! Settle-all combinators for fault-isolated fan-out.
//!
//! Every future runs to completion; one failure never cancels or delays its siblings.

use std::fmt::Display;
use std::future::Future;

use dioxus_logger::tracing;
use futures::future::join_all;

/// Await every future and keep the successes, preserving input order.
///
/// Failures are logged at `error` level with `description` and otherwise omitted.
pub async fn collect_successes<I, F, T, E>(description: &str, futures: I) -> Vec<T>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    join_all(futures)
        .await
        .into_iter()
        .filter_map(|result| match result {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Failed to load {}: {}", description, e);
                None
            }
        })
        .collect()
}

/// Convert a facet result into its value, or the facet's default on failure.
pub fn facet_or_default<T, E>(facet: &str, result: Result<T, E>) -> T
where
    T: Default,
    E: Display,
{
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to load {} facet, using empty value: {}", facet, e);
            T::default()
        }
    }
}
