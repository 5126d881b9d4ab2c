// tests/startlist_individual.rs
//
// Individual (no teams) startlist against a saved page.
//
use std::fs;

use startlist_scrape::{extract_startlist_html, Field, FieldSet, RaceStartlist};

const URL: &str = "https://www.procyclingstats.com/race/tour-de-pologne/2009/gc/startlist";

fn fixture() -> String {
    fs::read_to_string("tests/fixtures/race_tour-de-pologne_2009_gc_startlist.html").unwrap()
}

#[test]
fn riders_numbered_by_anchor_order() {
    let recs = extract_startlist_html(&fixture(), &["rider_name", "rider_number"]).unwrap();
    assert_eq!(recs.len(), 4);

    let got: Vec<_> = recs
        .iter()
        .map(|r| (r.text(Field::RiderName).unwrap(), r.number(Field::RiderNumber).unwrap()))
        .collect();
    assert_eq!(
        got,
        vec![
            ("BALLAN Alessandro", 1),
            ("FUGLSANG Jakob", 2),
            ("BOONEN Tom", 3),
            ("ARMSTRONG Lance", 4),
        ]
    );
    assert!(recs.iter().all(|r| r.len() == 2));
}

#[test]
fn team_fields_are_null_even_when_requested() {
    let page = RaceStartlist::new(URL, &fixture()).unwrap();
    assert_eq!(page.normalized_relative_url().as_str(), "race/tour-de-pologne/2009/startlist");

    let recs = page.startlist::<&str>(&[]).unwrap();
    assert_eq!(recs.len(), 4);
    for r in &recs {
        assert_eq!(r.len(), FieldSet::all().len());
        assert_eq!(r.get(Field::TeamName), None);
        assert_eq!(r.get(Field::TeamUrl), None);
        assert_eq!(r.get(Field::Nationality), None);
        assert!(r.text(Field::RiderUrl).unwrap().starts_with("rider/"));
    }
}

#[test]
fn empty_container_gives_no_riders() {
    let html = r#"<div class="page-content"><div><a class="nav" href="x">nav</a></div></div>"#;
    let recs = extract_startlist_html::<&str>(html, &[]).unwrap();
    assert!(recs.is_empty());
}
