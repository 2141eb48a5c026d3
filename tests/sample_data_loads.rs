use std::path::Path;

use filmscope::data::loader::load_dataset;

#[test]
fn shipped_sample_loads_and_survives_normalization() {
    let dataset = load_dataset(Path::new("data/film.csv")).expect("sample dataset loads");

    assert!(
        dataset.records.len() >= 30,
        "expected a usable corpus, got {}",
        dataset.records.len()
    );
    // The sample deliberately contains defective rows (missing director,
    // zero length, unparseable popularity); all must be silently dropped.
    assert!(dataset
        .records
        .iter()
        .all(|r| r.popularity != 0.0 && r.length != 0.0 && !r.director.is_empty()));
    assert!(!dataset.records.iter().any(|r| r.title == "Lost Reel"));
    assert!(!dataset.records.iter().any(|r| r.title == "Unrated Cut"));

    assert!(!dataset.subjects.is_empty());
    assert!(!dataset.directors.is_empty());
    assert_eq!(dataset.awards, ["No", "Yes"]);
}

#[test]
fn missing_file_reports_load_failure() {
    let err = load_dataset(Path::new("data/does_not_exist.csv"));
    assert!(err.is_err());
}
