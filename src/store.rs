//! The fixed sample dataset.

use std::collections::HashSet;

use crate::{PipelineError, Record};

/// Owns an ordered sequence of records with unique identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Build a store, rejecting any repeated record id.
    pub fn new(records: Vec<Record>) -> Result<Self, PipelineError> {
        let mut seen = HashSet::with_capacity(records.len());
        for r in &records {
            if !seen.insert(r.id) {
                return Err(PipelineError::DuplicateId(r.id));
            }
        }
        Ok(Self { records })
    }

    /// The ten-person sample dataset.
    pub fn sample() -> Self {
        Self {
            records: sample_records(),
        }
    }

    /// A fresh copy of the records, in insertion order.
    pub fn records(&self) -> Vec<Record> {
        self.records.clone()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Return the sample dataset, freshly allocated on every call.
pub fn get_records() -> Vec<Record> {
    RecordStore::sample().records()
}

fn sample_records() -> Vec<Record> {
    vec![
        Record::new(1, "张三", 10, "清华大学"),
        Record::new(2, "李四", 12, "清华大学"),
        Record::new(3, "王五", 15, "清华大学"),
        Record::new(4, "赵六", 12, "清华大学"),
        Record::new(5, "田七", 25, "北京大学"),
        Record::new(6, "小明", 16, "北京大学"),
        Record::new(7, "小红", 14, "北京大学"),
        Record::new(8, "小华", 14, "浙江大学"),
        Record::new(9, "小丽", 17, "浙江大学"),
        Record::new(10, "小何", 10, "浙江大学"),
    ]
}
