use std::collections::HashMap;

use super::record::Record;

/// One bar of the director chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectorMean {
    pub director: String,
    pub mean_popularity: f64,
    pub films: usize,
}

/// Group the filtered records by director, take the arithmetic mean of
/// popularity per group, sort descending by mean (name breaks ties so the
/// ranking is deterministic), keep the first `top_n`.
pub fn director_means(records: &[&Record], top_n: usize) -> Vec<DirectorMean> {
    let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
    for r in records {
        let entry = sums.entry(r.director.as_str()).or_insert((0.0, 0));
        entry.0 += r.popularity;
        entry.1 += 1;
    }
    let mut means: Vec<DirectorMean> = sums
        .into_iter()
        .map(|(director, (sum, films))| DirectorMean {
            director: director.to_string(),
            mean_popularity: sum / films as f64,
            films,
        })
        .collect();
    means.sort_by(|a, b| {
        b.mean_popularity
            .partial_cmp(&a.mean_popularity)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.director.cmp(&b.director))
    });
    means.truncate(top_n);
    means
}

/// One cell of the subject treemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectCount {
    pub subject: String,
    pub films: usize,
}

/// Film counts by subject, sorted by subject name. Always computed over
/// the full unfiltered dataset so the treemap stays a stable overview
/// while the other views narrow.
pub fn subject_counts(records: &[Record]) -> Vec<SubjectCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in records {
        *counts.entry(r.subject.as_str()).or_insert(0) += 1;
    }
    let mut out: Vec<SubjectCount> = counts
        .into_iter()
        .map(|(subject, films)| SubjectCount {
            subject: subject.to_string(),
            films,
        })
        .collect();
    out.sort_by(|a, b| a.subject.cmp(&b.subject));
    out
}

/// The [min, max] range of a numeric field, or None for an empty input.
pub fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    let mut iter = values.into_iter();
    let first = iter.next()?;
    let mut lo = first;
    let mut hi = first;
    for v in iter {
        if v < lo {
            lo = v;
        }
        if v > hi {
            hi = v;
        }
    }
    Some((lo, hi))
}
