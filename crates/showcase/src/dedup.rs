use std::{collections::HashSet, hash::Hash};

use shared::{
    domain::Record,
    error::{Result, ShowcaseError},
};
use tracing::debug;

/// Collects `items`, keeping only the first occurrence of each value.
pub fn stable_unique<I, T>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items.into_iter().fold(Vec::new(), |mut unique, item| {
        if seen.insert(item.clone()) {
            unique.push(item);
        }
        unique
    })
}

/// Category labels of `records` in first-occurrence order.
pub fn unique_kinds(records: &[Record]) -> Vec<String> {
    let kinds = stable_unique(records.iter().map(|record| record.kind.clone()));
    debug!(records = records.len(), kinds = kinds.len(), "deduplicated record kinds");
    kinds
}

/// Joins labels the way an array prints: comma separated, no spaces.
pub fn render_kinds(kinds: &[String]) -> String {
    kinds.join(",")
}

/// Parses a JSON array of `{ "name", "type" }` objects. A record missing
/// either field fails with its index instead of being skipped.
pub fn parse_records(raw: &str) -> Result<Vec<Record>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw)
        .map_err(|err| ShowcaseError::MalformedRecordList(err.to_string()))?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value::<Record>(value).map_err(|err| {
                ShowcaseError::MalformedRecord {
                    index,
                    message: err.to_string(),
                }
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/dedup_tests.rs"]
mod tests;
