//! Dataset loading, filtering, and the aggregates behind each view.

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod record;

pub use record::{Awards, RawRow, Record};

use filter::derive_options;

/// Errors on the one-shot load path.
#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// The loaded corpus: an immutable ordered sequence of records plus the
/// option lists for the three filter controls, derived once from the full
/// dataset. Options never shrink as filters change.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
    pub subjects: Vec<String>,
    pub directors: Vec<String>,
    pub awards: Vec<String>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        let subjects = derive_options(&records, |r| r.subject.as_str());
        let directors = derive_options(&records, |r| r.director.as_str());
        let awards = derive_options(&records, |r| r.awards.as_str());
        Self {
            records,
            subjects,
            directors,
            awards,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
