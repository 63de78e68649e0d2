//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `decisions` and `trip_summaries`.  Absent optional values are
//! stored as `NULL`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{DecisionRow, OutputResult, TripSummaryRow};

/// Writes trip output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS decisions (
                 trip_id        INTEGER NOT NULL,
                 tick           INTEGER NOT NULL,
                 unix_time_secs INTEGER NOT NULL,
                 decision       TEXT    NOT NULL,
                 status         TEXT    NOT NULL,
                 active_route   INTEGER,
                 switched_from  INTEGER,
                 progress       REAL    NOT NULL,
                 total_cost     REAL,
                 fuel_liters    REAL,
                 co2_kg         REAL,
                 confidence     REAL
             );
             CREATE TABLE IF NOT EXISTS trip_summaries (
                 trip_id          INTEGER PRIMARY KEY,
                 status           TEXT    NOT NULL,
                 ticks            INTEGER NOT NULL,
                 switches         INTEGER NOT NULL,
                 degraded_ticks   INTEGER NOT NULL,
                 final_route      INTEGER,
                 route_history    TEXT    NOT NULL,
                 final_total_cost REAL,
                 elapsed_secs     INTEGER NOT NULL,
                 abort_reason     TEXT
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_decisions(&mut self, rows: &[DecisionRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO decisions \
                 (trip_id, tick, unix_time_secs, decision, status, active_route, switched_from, \
                  progress, total_cost, fuel_liters, co2_kg, confidence) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.trip_id,
                    row.tick as i64,
                    row.unix_time_secs,
                    row.decision,
                    row.status,
                    row.active_route,
                    row.switched_from,
                    row.progress,
                    row.total_cost,
                    row.fuel_liters,
                    row.co2_kg,
                    row.confidence,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_trip_summary(&mut self, row: &TripSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO trip_summaries \
             (trip_id, status, ticks, switches, degraded_ticks, final_route, route_history, \
              final_total_cost, elapsed_secs, abort_reason) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            rusqlite::params![
                row.trip_id,
                row.status,
                row.ticks as i64,
                row.switches,
                row.degraded_ticks,
                row.final_route,
                row.route_history,
                row.final_total_cost,
                row.elapsed_secs as i64,
                row.abort_reason,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
