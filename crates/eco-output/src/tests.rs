//! Integration tests for eco-output.

use std::sync::Arc;

use eco_core::{GeoPoint, RouteId, TripConfig, TripId};
use eco_engine::{EngineBuilder, EngineConfig, Progression};
use eco_env::FixedEnvironment;
use eco_route::{CandidateSet, RouteSummary, StaticRouter};
use eco_sim::{TripSimulator, TripSummary};

use crate::row::{DecisionRow, TripSummaryRow};

fn config() -> TripConfig {
    TripConfig { start_unix_secs: 1_000, tick_duration_secs: 60, max_ticks: 100, seed: 0 }
}

fn decision_row(tick: u64, decision: &'static str) -> DecisionRow {
    DecisionRow {
        trip_id:        7,
        tick,
        unix_time_secs: 1_000 + tick as i64 * 60,
        decision,
        status:         "in_progress",
        active_route:   Some(1),
        switched_from:  None,
        progress:       0.5,
        total_cost:     Some(1.25),
        fuel_liters:    Some(10.0),
        co2_kg:         Some(23.1),
        confidence:     Some(1.0),
    }
}

fn summary_row(trip_id: u32) -> TripSummaryRow {
    TripSummaryRow {
        trip_id,
        status:           "arrived",
        ticks:            5,
        switches:         1,
        degraded_ticks:   0,
        final_route:      Some(2),
        route_history:    "0>2".into(),
        final_total_cost: Some(3.5),
        elapsed_secs:     240,
        abort_reason:     None,
    }
}

/// Runs a calm two-route trip to arrival through `observer`.
fn run_trip<O: eco_sim::TripObserver>(observer: &mut O) -> TripSummary {
    let origin = GeoPoint::new(40.0, -74.0);
    let destination = GeoPoint::new(41.0, -74.0);
    let routes = vec![
        RouteSummary::new(RouteId(0), vec![origin, GeoPoint::new(40.5, -74.0), destination], 120.0, 120.0),
        RouteSummary::new(RouteId(1), vec![origin, GeoPoint::new(40.5, -73.5), destination], 130.0, 120.0),
    ];
    let set = Arc::new(CandidateSet::from_routes(origin, destination, routes).unwrap());
    let engine = EngineBuilder::new(TripId(7), FixedEnvironment::calm(), StaticRouter::default())
        .trip_config(config())
        .engine_config(EngineConfig { progression: Progression::FixedStep(0.25), ..EngineConfig::default() })
        .candidates(set)
        .build()
        .unwrap();
    TripSimulator::new(engine).run(observer).unwrap()
}

#[cfg(test)]
mod rows {
    use super::*;
    use eco_core::Tick;
    use eco_engine::{Decision, DecisionEvent, TripStatus};

    #[test]
    fn decision_row_from_switch_event() {
        let event = DecisionEvent {
            trip:         TripId(3),
            tick:         Tick(4),
            decision:     Decision::Switch { from: RouteId(0), to: RouteId(2) },
            status:       TripStatus::Rerouted,
            active_route: Some(RouteId(2)),
            progress:     0.25,
            cost:         None,
        };
        let row = DecisionRow::from_event(&event, &config().make_clock());
        assert_eq!(row.trip_id, 3);
        assert_eq!(row.unix_time_secs, 1_240);
        assert_eq!(row.decision, "switch");
        assert_eq!(row.status, "rerouted");
        assert_eq!(row.active_route, Some(2));
        assert_eq!(row.switched_from, Some(0));
        assert_eq!(row.total_cost, None);
    }

    #[test]
    fn summary_row_joins_history() {
        let mut summary = TripSummary::new(TripId(1));
        summary.route_history = vec![RouteId(0), RouteId(2), RouteId(1)];
        summary.abort_reason = Some("abort requested".into());
        let row = TripSummaryRow::from(&summary);
        assert_eq!(row.route_history, "0>2>1");
        assert_eq!(row.final_route, Some(1));
        assert_eq!(row.status, "planning");
        assert_eq!(row.abort_reason.as_deref(), Some("abort requested"));
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::{CsvWriter, DECISION_HEADERS, SUMMARY_HEADERS};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("decisions.csv").exists());
        assert!(dir.path().join("trip_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("decisions.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, DECISION_HEADERS);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("trip_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, SUMMARY_HEADERS);
    }

    #[test]
    fn csv_decisions_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let mut planning = decision_row(0, "continue");
        planning.total_cost = None;
        w.write_decisions(&[planning, decision_row(1, "continue"), decision_row(2, "degraded")]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("decisions.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "7");     // trip_id
        assert_eq!(&rows[0][8], "");      // total_cost absent
        assert_eq!(&rows[1][2], "1060");  // unix_time_secs
        assert_eq!(&rows[1][8], "1.25");
        assert_eq!(&rows[2][3], "degraded");
        assert_eq!(&rows[2][6], "");      // switched_from
    }

    #[test]
    fn csv_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trip_summary(&summary_row(4)).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // idempotent

        let mut rdr = csv::Reader::from_path(dir.path().join("trip_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "4");
        assert_eq!(&rows[0][1], "arrived");
        assert_eq!(&rows[0][6], "0>2");
        assert_eq!(&rows[0][9], "");
    }

    #[test]
    fn observer_writes_a_whole_trip() {
        let dir = tmp();
        let mut obs = crate::TripOutputObserver::new(CsvWriter::new(dir.path()).unwrap(), &config());
        let summary = run_trip(&mut obs);
        assert!(obs.take_error().is_none());
        assert!(summary.arrived());

        let mut rdr = csv::Reader::from_path(dir.path().join("decisions.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 5);
        let decisions: Vec<&str> = rows.iter().map(|r| &r[3]).collect();
        assert_eq!(decisions, ["continue", "continue", "continue", "continue", "arrived"]);
        assert_eq!(&rows[4][4], "arrived");
        assert_eq!(&rows[4][5], "0");

        let mut rdr = csv::Reader::from_path(dir.path().join("trip_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "7");
        assert_eq!(&rows[0][2], "5");
        assert_eq!(&rows[0][6], "0");
    }
}

#[cfg(test)]
mod observer_errors {
    use super::*;
    use crate::{OutputError, OutputResult, OutputWriter, TripOutputObserver};

    /// Fails every write, counting attempts.
    #[derive(Default)]
    struct BrokenWriter {
        attempts: u32,
    }

    impl OutputWriter for BrokenWriter {
        fn write_decisions(&mut self, _rows: &[DecisionRow]) -> OutputResult<()> {
            self.attempts += 1;
            Err(OutputError::Io(std::io::Error::other(format!("disk full #{}", self.attempts))))
        }

        fn write_trip_summary(&mut self, _row: &TripSummaryRow) -> OutputResult<()> {
            self.attempts += 1;
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept_and_the_trip_still_finishes() {
        let mut obs = TripOutputObserver::new(BrokenWriter::default(), &config());
        let summary = run_trip(&mut obs);
        assert!(summary.arrived());

        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("disk full #1"), "{err}");
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().attempts, 6);
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_round_trip() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let mut switch = decision_row(2, "switch");
        switch.switched_from = Some(0);
        w.write_decisions(&[decision_row(1, "continue"), switch]).unwrap();
        w.write_trip_summary(&summary_row(7)).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM decisions", [], |r| r.get(0)).unwrap();
        assert_eq!(n, 2);
        let from: Option<u32> = conn
            .query_row("SELECT switched_from FROM decisions WHERE decision = 'switch'", [], |r| r.get(0))
            .unwrap();
        assert_eq!(from, Some(0));
        let (status, history): (String, String) = conn
            .query_row("SELECT status, route_history FROM trip_summaries WHERE trip_id = 7", [], |r| {
                Ok((r.get(0)?, r.get(1)?))
            })
            .unwrap();
        assert_eq!(status, "arrived");
        assert_eq!(history, "0>2");
    }

    #[test]
    fn observer_writes_sqlite() {
        let dir = tmp();
        let mut obs = crate::TripOutputObserver::new(SqliteWriter::new(dir.path()).unwrap(), &config());
        run_trip(&mut obs);
        assert!(obs.take_error().is_none());
        drop(obs);

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM decisions WHERE trip_id = 7", [], |r| r.get(0)).unwrap();
        assert_eq!(n, 5);
    }
}
