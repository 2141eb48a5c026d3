use filmscope::data::record::{normalize, Awards, RawRow};

fn row(title: &str, director: &str, popularity: &str, length: &str) -> RawRow {
    RawRow {
        title: title.to_string(),
        director: director.to_string(),
        subject: "Drama".to_string(),
        awards: "No".to_string(),
        popularity: popularity.to_string(),
        length: length.to_string(),
    }
}

#[test]
fn keeps_well_formed_rows() {
    let records = normalize(vec![row("X", "Lee", "5", "90")]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "X");
    assert_eq!(records[0].popularity, 5.0);
    assert_eq!(records[0].length, 90.0);
}

#[test]
fn drops_empty_director() {
    assert!(normalize(vec![row("X", "", "5", "90")]).is_empty());
    assert!(normalize(vec![row("X", "   ", "5", "90")]).is_empty());
}

#[test]
fn drops_zero_or_unparseable_numerics() {
    assert!(normalize(vec![row("X", "Lee", "0", "90")]).is_empty());
    assert!(normalize(vec![row("X", "Lee", "5", "0")]).is_empty());
    assert!(normalize(vec![row("X", "Lee", "", "90")]).is_empty());
    assert!(normalize(vec![row("X", "Lee", "N/A", "90")]).is_empty());
    assert!(normalize(vec![row("X", "Lee", "5", "abc")]).is_empty());
}

#[test]
fn drop_is_silent_and_order_preserving() {
    let records = normalize(vec![
        row("A", "Lee", "5", "90"),
        row("B", "", "5", "90"),
        row("C", "Kim", "7", "120"),
    ]);
    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["A", "C"]);
}

#[test]
fn subject_is_trimmed() {
    let mut raw = row("X", "Lee", "5", "90");
    raw.subject = "  Drama ".to_string();
    let records = normalize(vec![raw]);
    assert_eq!(records[0].subject, "Drama");
}

#[test]
fn awards_matches_yes_case_insensitively() {
    for yes in ["YES", " yes ", "Yes!", "yes"] {
        assert_eq!(Awards::classify(yes.trim()), Awards::Yes, "{yes:?}");
    }
    for no in ["no", "", "N/A", "nope"] {
        assert_eq!(Awards::classify(no.trim()), Awards::No, "{no:?}");
    }
}
