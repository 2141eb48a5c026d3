use filmscope::data::aggregate::{director_means, extent};
use filmscope::data::record::{Awards, Record};

fn record(director: &str, popularity: f64) -> Record {
    Record {
        title: "T".to_string(),
        director: director.to_string(),
        subject: "Drama".to_string(),
        awards: Awards::No,
        popularity,
        length: 100.0,
    }
}

#[test]
fn means_are_sorted_descending() {
    let records = vec![record("A", 2.0), record("A", 4.0), record("B", 9.0)];
    let refs: Vec<&Record> = records.iter().collect();
    let means = director_means(&refs, 8);
    assert_eq!(means.len(), 2);
    assert_eq!(means[0].director, "B");
    assert_eq!(means[0].mean_popularity, 9.0);
    assert_eq!(means[1].director, "A");
    assert_eq!(means[1].mean_popularity, 3.0);
    assert_eq!(means[1].films, 2);
}

#[test]
fn only_top_n_survive() {
    let records: Vec<Record> = (0..12)
        .map(|i| record(&format!("D{i:02}"), i as f64))
        .collect();
    let refs: Vec<&Record> = records.iter().collect();
    let means = director_means(&refs, 8);
    assert_eq!(means.len(), 8);
    assert_eq!(means[0].director, "D11");
    assert_eq!(means[7].director, "D04");
}

#[test]
fn ties_break_by_name_for_determinism() {
    let records = vec![record("B", 5.0), record("A", 5.0)];
    let refs: Vec<&Record> = records.iter().collect();
    let means = director_means(&refs, 8);
    assert_eq!(means[0].director, "A");
    assert_eq!(means[1].director, "B");
}

#[test]
fn empty_input_yields_no_bars() {
    assert!(director_means(&[], 8).is_empty());
}

#[test]
fn extent_spans_min_and_max() {
    assert_eq!(extent([3.0, 1.0, 2.0]), Some((1.0, 3.0)));
    assert_eq!(extent([7.0]), Some((7.0, 7.0)));
    assert_eq!(extent(std::iter::empty()), None);
}
