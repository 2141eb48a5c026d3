use crate::config::ChartsConfig;
use crate::data::aggregate::{director_means, subject_counts, DirectorMean, SubjectCount};
use crate::data::filter::{apply_filters, FilterState};
use crate::data::{Dataset, Record};

/// Everything the three views consume for one frame, derived fresh from
/// the dataset and the current filters. The bar chart and scatter read the
/// filtered subset; the treemap counts are always over the full dataset.
#[derive(Debug)]
pub struct ViewData<'a> {
    pub filtered: Vec<&'a Record>,
    pub director_means: Vec<DirectorMean>,
    pub subject_counts: Vec<SubjectCount>,
}

impl<'a> ViewData<'a> {
    pub fn derive(dataset: &'a Dataset, filters: &FilterState, charts: &ChartsConfig) -> Self {
        let filtered = apply_filters(&dataset.records, filters);
        let director_means = director_means(&filtered, charts.top_directors);
        let subject_counts = subject_counts(&dataset.records);
        Self {
            filtered,
            director_means,
            subject_counts,
        }
    }
}
