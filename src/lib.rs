//! # record-streams
//!
//! Collection-pipeline operations over an in-memory sequence of records.
//!
//! The crate demonstrates the classic stream operations on a small, fixed
//! dataset of ten people: filtering by school, distinct ages, taking the
//! first matches, sorting by age, and skipping a prefix.
//!
//! ## Overview
//!
//! - **Records**: immutable values with id, name, age and school
//! - **Record store**: hands out fresh copies of the sample dataset
//! - **Pipeline**: chainable stages (filter, map, distinct, take, skip, sort)
//! - **Operations**: the five pure functions built on the pipeline
//!
//! ## Example
//!
//! ```
//! use record_streams::{filter, get_records, limit};
//!
//! let records = get_records();
//!
//! let tsinghua = filter(&records, |r| r.is_from("清华大学"));
//! assert_eq!(tsinghua.len(), 4);
//!
//! let even = limit(&records, |r| r.age % 2 == 0, 2).unwrap();
//! assert_eq!(even[0].name, "张三");
//! assert_eq!(even[1].name, "李四");
//! ```

pub mod error;
pub mod ops;
pub mod pipeline;
pub mod record;
pub mod sample;
pub mod store;

pub use error::PipelineError;
pub use ops::{distinct_by_key, filter, limit, skip, sorted_desc};
pub use pipeline::{DistinctBy, Pipeline};
pub use record::Record;
pub use sample::{DEFAULT_COUNT, DEFAULT_DELIMITER, DEFAULT_SCHOOL, Sample, SampleOutput};
pub use store::{RecordStore, get_records};
