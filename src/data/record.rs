/// One row of the CSV as read, before any typing or validation.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    pub title: String,
    pub director: String,
    pub subject: String,
    pub awards: String,
    pub popularity: String,
    pub length: String,
}

/// Whether a film won any award.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Awards {
    Yes,
    No,
}

impl Awards {
    /// Case-insensitive substring match on "yes"; everything else is No.
    pub fn classify(raw: &str) -> Self {
        if raw.to_lowercase().contains("yes") {
            Awards::Yes
        } else {
            Awards::No
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Awards::Yes => "Yes",
            Awards::No => "No",
        }
    }
}

/// One normalized film entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub title: String,
    pub director: String,
    pub subject: String,
    pub awards: Awards,
    pub popularity: f64,
    pub length: f64,
}

/// Coerce a text field to a number. Parse failures and non-finite values
/// collapse to 0.0, which the retention rule below then drops: a field
/// that fails to parse is indistinguishable from a legitimately absent
/// value.
fn coerce(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Turn raw rows into typed records, silently dropping rows with zero
/// popularity, zero length, or an empty director. Malformed rows are a
/// data-quality policy, not an error.
pub fn normalize(rows: Vec<RawRow>) -> Vec<Record> {
    rows.into_iter()
        .filter_map(|row| {
            let popularity = coerce(&row.popularity);
            let length = coerce(&row.length);
            let director = row.director.trim().to_string();
            if popularity == 0.0 || length == 0.0 || director.is_empty() {
                return None;
            }
            Some(Record {
                title: row.title,
                director,
                subject: row.subject.trim().to_string(),
                awards: Awards::classify(row.awards.trim()),
                popularity,
                length,
            })
        })
        .collect()
}
