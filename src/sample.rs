//! The five demonstration samples and their text rendering.
//!
//! Each sample applies one operation to the record sequence with the
//! parameters of the classic stream walkthrough: Tsinghua students,
//! distinct ages, the first two even ages, oldest first, and everyone
//! after the first two.

use std::fmt;

use tracing::info;

use crate::{PipelineError, Record, ops};

/// School used by the filter sample unless overridden.
pub const DEFAULT_SCHOOL: &str = "清华大学";
/// Count used by the limit and skip samples unless overridden.
pub const DEFAULT_COUNT: i64 = 2;
/// Separator placed between rendered names.
pub const DEFAULT_DELIMITER: &str = "、";

/// One runnable demonstration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sample {
    /// Records from the given school.
    Filter { school: String },
    /// Every age, once, in order of first appearance.
    Distinct,
    /// The first `n` records with an even age.
    Limit { n: i64 },
    /// All records, oldest first.
    Sorted,
    /// All records after the first `n`.
    Skip { n: i64 },
}

impl Default for Sample {
    fn default() -> Self {
        Sample::Filter {
            school: DEFAULT_SCHOOL.to_string(),
        }
    }
}

/// Result of running a sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleOutput {
    Records(Vec<Record>),
    Ages(Vec<u32>),
}

impl SampleOutput {
    pub fn len(&self) -> usize {
        match self {
            SampleOutput::Records(records) => records.len(),
            SampleOutput::Ages(ages) => ages.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Join record names (or ages) with `delimiter`.
    pub fn render(&self, delimiter: &str) -> String {
        match self {
            SampleOutput::Records(records) => records
                .iter()
                .map(|r| r.name.as_str())
                .collect::<Vec<_>>()
                .join(delimiter),
            SampleOutput::Ages(ages) => ages
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(delimiter),
        }
    }
}

impl Sample {
    /// Short name, as used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Sample::Filter { .. } => "filter",
            Sample::Distinct => "distinct",
            Sample::Limit { .. } => "limit",
            Sample::Sorted => "sorted",
            Sample::Skip { .. } => "skip",
        }
    }

    /// Human-readable heading describing what the sample shows.
    pub fn title(&self) -> String {
        match self {
            Sample::Filter { school } => format!("Records from {school}"),
            Sample::Distinct => "Distinct ages".to_string(),
            Sample::Limit { n } => format!("First {n} records with an even age"),
            Sample::Sorted => "Records by age, oldest first".to_string(),
            Sample::Skip { n } => format!("Records after the first {n}"),
        }
    }

    /// Apply this sample to `records`.
    pub fn run(&self, records: &[Record]) -> Result<SampleOutput, PipelineError> {
        let output = match self {
            Sample::Filter { school } => {
                SampleOutput::Records(ops::filter(records, |r| r.is_from(school)))
            }
            Sample::Distinct => SampleOutput::Ages(ops::distinct_by_key(records, |r| r.age)),
            Sample::Limit { n } => {
                SampleOutput::Records(ops::limit(records, Record::has_even_age, *n)?)
            }
            Sample::Sorted => SampleOutput::Records(ops::sorted_desc(records, |r| r.age)),
            Sample::Skip { n } => SampleOutput::Records(ops::skip(records, *n)?),
        };
        info!(
            sample = self.name(),
            input = records.len(),
            output = output.len(),
            "sample complete"
        );
        Ok(output)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
