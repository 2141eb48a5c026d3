use std::collections::BTreeSet;

use super::record::Record;

/// The three active dropdown selections. `None` means "all": the filter
/// passes every record on that dimension.
///
/// All mutation happens here so the write sites stay enumerable: the
/// dropdowns, the two reset buttons, and the treemap click all go through
/// these methods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub subject: Option<String>,
    pub director: Option<String>,
    pub awards: Option<String>,
}

impl FilterState {
    pub fn reset_all(&mut self) {
        *self = FilterState::default();
    }

    pub fn reset_subject(&mut self) {
        self.subject = None;
    }

    pub fn select_subject(&mut self, subject: &str) {
        self.subject = Some(subject.to_string());
    }

    /// Exact, case-sensitive match per dimension; `None` passes everything.
    pub fn matches(&self, record: &Record) -> bool {
        fn dim(filter: &Option<String>, value: &str) -> bool {
            match filter {
                None => true,
                Some(wanted) => wanted == value,
            }
        }
        dim(&self.subject, &record.subject)
            && dim(&self.director, &record.director)
            && dim(&self.awards, record.awards.as_str())
    }
}

/// Order-preserving projection of the dataset through the current filters.
/// Pure function of its inputs; O(n) over the full dataset, which is fine
/// at this scale.
pub fn apply_filters<'a>(records: &'a [Record], state: &FilterState) -> Vec<&'a Record> {
    records.iter().filter(|r| state.matches(r)).collect()
}

/// Distinct values of one field across the full dataset: trimmed, empties
/// dropped, sorted ascending. The UI prepends the "All" sentinel; these
/// are the concrete choices that follow it.
pub fn derive_options<F>(records: &[Record], field: F) -> Vec<String>
where
    F: Fn(&Record) -> &str,
{
    let set: BTreeSet<&str> = records
        .iter()
        .map(|r| field(r).trim())
        .filter(|v| !v.is_empty())
        .collect();
    set.into_iter().map(str::to_string).collect()
}
