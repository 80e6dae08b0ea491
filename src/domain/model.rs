use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::num::NonZeroU64;

pub const DEFAULT_BATCH_SIZE: NonZeroU64 = match NonZeroU64::new(8) {
    Some(size) => size,
    None => unreachable!(),
};

/// Item name to units on hand.
pub type Stock = BTreeMap<String, u64>;

/// Item name to number of full batches that can ship, in the order requested.
pub type Fulfillment = IndexMap<String, u64>;

/// Literal inputs every snippet draws from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetInputs {
    pub lengths: Vec<i64>,
    pub numbers: Vec<i64>,
    pub matrix: Vec<Vec<i64>>,
    pub stock: Stock,
    pub order: Vec<String>,
    pub batch_size: NonZeroU64,
}

impl Default for SnippetInputs {
    fn default() -> Self {
        let stock = [("nails", 125), ("screws", 35), ("wingnuts", 8), ("washers", 24)]
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();

        Self {
            lengths: vec![63, 73, 72, 60, 67, 66, 71, 61, 72, 70],
            numbers: (1..=10).collect(),
            matrix: vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]],
            stock,
            order: ["screws", "wingnuts", "clips"]
                .into_iter()
                .map(String::from)
                .collect(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats<T> {
    pub minimum: T,
    pub maximum: T,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub label: String,
    pub value: serde_json::Value,
    #[serde(skip)]
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnippetReport {
    pub snippet: String,
    pub lines: Vec<ReportLine>,
}

impl SnippetReport {
    pub fn new(snippet: impl Into<String>) -> Self {
        Self {
            snippet: snippet.into(),
            lines: Vec::new(),
        }
    }

    /// Appends a line, serializing `value` for structured output.
    pub fn push<T: Serialize>(
        &mut self,
        label: impl Into<String>,
        value: &T,
        display: impl Into<String>,
    ) -> crate::utils::error::Result<()> {
        self.lines.push(ReportLine {
            label: label.into(),
            value: serde_json::to_value(value)?,
            display: display.into(),
        });
        Ok(())
    }

    pub fn line(&self, label: &str) -> Option<&ReportLine> {
        self.lines.iter().find(|line| line.label == label)
    }
}
