// tests/pipeline_cache.rs
mod common;

use std::time::Duration;

use common::{FakeFetch, Reply, FIXTURES_HTML, NO_TABLES_HTML, STANDINGS_HTML};
use fbref_dash::config::{
    leagues,
    options::{DocumentKind, Query, Season},
};
use fbref_dash::error::PipelineError;
use fbref_dash::progress::Progress;
use fbref_dash::scrape::{fetch_and_normalize, Pipeline};

fn query(kind: DocumentKind) -> Query {
    Query {
        competition: *leagues::find("Premier League").unwrap(),
        season: "2022-2023".parse().unwrap(),
        kind,
    }
}

#[derive(Default)]
struct Recorder {
    lines: Vec<String>,
    finished: Vec<bool>,
}

impl Progress for Recorder {
    fn log(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }
    fn finish(&mut self, ok: bool) {
        self.finished.push(ok);
    }
}

#[test]
fn second_identical_request_is_served_from_cache() {
    let fake = FakeFetch::body(STANDINGS_HTML);
    let mut pipeline = Pipeline::new(&fake);
    let q = query(DocumentKind::Standings);

    let first = pipeline.run(&q, None).unwrap();
    let second = pipeline.run(&q, None).unwrap();

    assert_eq!(fake.calls(), 1);
    assert_eq!(first, second);
    assert_eq!(pipeline.cached_entries(), 1);
    assert_eq!(
        fake.urls(),
        vec!["https://fbref.com/en/comps/9/2022-2023/2022-2023-Premier-League-Stats".to_string()]
    );
}

#[test]
fn any_key_part_changing_is_a_new_request() {
    let fake = FakeFetch::body(STANDINGS_HTML);
    let mut pipeline = Pipeline::new(&fake);
    let q = query(DocumentKind::Standings);
    pipeline.run(&q, None).unwrap();

    let other_season = Query { season: Season::starting(2021), ..q };
    pipeline.run(&other_season, None).unwrap();

    let other_league = Query { competition: *leagues::find("Serie A").unwrap(), ..q };
    pipeline.run(&other_league, None).unwrap();

    assert_eq!(fake.calls(), 3);
    pipeline.run(&q, None).unwrap();
    assert_eq!(fake.calls(), 3);
}

#[test]
fn expired_entries_are_fetched_again() {
    let fake = FakeFetch::body(FIXTURES_HTML);
    let mut pipeline = Pipeline::with_ttl(&fake, Duration::ZERO);
    let q = query(DocumentKind::Fixtures);

    pipeline.run(&q, None).unwrap();
    pipeline.run(&q, None).unwrap();
    assert_eq!(fake.calls(), 2);
}

#[test]
fn zero_tables_is_data_unavailable_for_that_season() {
    let fake = FakeFetch::body(NO_TABLES_HTML);
    let mut pipeline = Pipeline::new(&fake);
    let q = query(DocumentKind::Standings);

    let err = pipeline.run(&q, None).unwrap_err();
    assert_eq!(err, PipelineError::DataUnavailable { season: q.season });
    assert_eq!(err.to_string(), "No tables found for the 2022-2023 season.");
}

#[test]
fn only_an_empty_table_is_data_unavailable() {
    let fake = FakeFetch::body("<html><body><table></table></body></html>");
    let mut pipeline = Pipeline::new(&fake);
    let q = query(DocumentKind::Fixtures);

    let err = pipeline.run(&q, None).unwrap_err();
    assert_eq!(err, PipelineError::DataUnavailable { season: q.season });
}

#[test]
fn failures_are_not_cached() {
    let fake = FakeFetch::body(NO_TABLES_HTML);
    let mut pipeline = Pipeline::new(&fake);
    let q = query(DocumentKind::Standings);

    assert!(pipeline.run(&q, None).is_err());
    assert!(pipeline.run(&q, None).is_err());
    assert_eq!(fake.calls(), 2);
    assert_eq!(pipeline.cached_entries(), 0);
}

#[test]
fn not_found_maps_to_data_unavailable() {
    let fake = FakeFetch::new(Reply::NotFound);
    let q = query(DocumentKind::Fixtures);
    let err = fetch_and_normalize(&fake, &q).unwrap_err();
    assert_eq!(err, PipelineError::DataUnavailable { season: q.season });
}

#[test]
fn other_http_errors_map_to_fetch_error() {
    let fake = FakeFetch::new(Reply::Status(503));
    let q = query(DocumentKind::Standings);
    match fetch_and_normalize(&fake, &q) {
        Err(PipelineError::Fetch(msg)) => assert!(msg.contains("503"), "{msg}"),
        other => panic!("expected fetch error, got {other:?}"),
    }
}

#[test]
fn schema_mismatch_surfaces_through_the_pipeline() {
    let fake = FakeFetch::body(FIXTURES_HTML);
    let mut pipeline = Pipeline::new(&fake);
    // a schedule page asked for as standings
    let err = pipeline.run(&query(DocumentKind::Standings), None).unwrap_err();
    assert!(matches!(err, PipelineError::SchemaMismatch { kind: DocumentKind::Standings, .. }));
}

#[test]
fn progress_sees_fetch_then_finish() {
    let fake = FakeFetch::body(STANDINGS_HTML);
    let mut pipeline = Pipeline::new(&fake);
    let q = query(DocumentKind::Standings);

    let mut rec = Recorder::default();
    pipeline.run(&q, Some(&mut rec)).unwrap();
    pipeline.run(&q, Some(&mut rec)).unwrap();

    // cache hit skips the "Fetching data..." line
    assert_eq!(rec.lines, vec!["Fetching data...".to_string()]);
    assert_eq!(rec.finished, vec![true, true]);
}
