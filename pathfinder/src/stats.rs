use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use eyre::WrapErr;
use serde::{Deserialize, Serialize};

use crate::{
    algorithms::{Algorithm, SearchOutcome},
    config::GridSize,
    grid::{Grid, Position},
};

/// one finished run, as handed to the history collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub algorithm: Algorithm,
    pub grid_size: GridSize,
    pub start: Position,
    pub end: Position,
    pub wall_positions: Vec<Position>,
    pub path_found: bool,
    pub path_length: usize,
    pub visited_count: usize,
    /// milliseconds
    pub execution_time: f64,
    pub created_at: DateTime<Utc>,
}

impl SearchRecord {
    pub fn new(
        algorithm: Algorithm,
        grid: &Grid,
        (start, end): (Position, Position),
        outcome: &SearchOutcome,
    ) -> Self {
        Self {
            algorithm,
            grid_size: grid.size(),
            start,
            end,
            wall_positions: grid.walls(),
            path_found: outcome.success,
            path_length: outcome.path_length(),
            visited_count: outcome.visited_count,
            execution_time: outcome.execution_time_ms(),
            created_at: Utc::now(),
        }
    }
}

pub trait StatisticsSink {
    fn record(&mut self, record: &SearchRecord) -> eyre::Result<()>;
}

/// shared in-memory history; clones see the same records
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<SearchRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<SearchRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl StatisticsSink for MemorySink {
    fn record(&mut self, record: &SearchRecord) -> eyre::Result<()> {
        self.records
            .lock()
            .map_err(|_| eyre::eyre!("history lock poisoned"))?
            .push(record.clone());
        Ok(())
    }
}

/// appends one JSON document per line
pub struct JsonLinesSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl JsonLinesSink {
    pub fn open(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .wrap_err_with(|| format!("failed to open history file {}", path.display()))?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatisticsSink for JsonLinesSink {
    fn record(&mut self, record: &SearchRecord) -> eyre::Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.writer
            .flush()
            .wrap_err_with(|| format!("failed to write {}", self.path.display()))?;

        log::debug!("recorded {} run to {}", record.algorithm, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn record() -> SearchRecord {
        let mut grid = Grid::with_default_endpoints(3, 3).unwrap();
        grid.set_wall(Position::new(1, 1), true).unwrap();
        let outcome = SearchOutcome::found(
            vec![
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 2),
                Position::new(2, 2),
            ],
            5,
            Duration::from_micros(1500),
        );
        SearchRecord::new(
            Algorithm::BreadthFirst,
            &grid,
            (Position::new(0, 0), Position::new(2, 2)),
            &outcome,
        )
    }

    #[test]
    fn record_mirrors_the_outcome() {
        let record = record();
        assert_eq!(record.grid_size, GridSize::new(3, 3));
        assert_eq!(record.wall_positions, vec![Position::new(1, 1)]);
        assert!(record.path_found);
        assert_eq!(record.path_length, 4);
        assert_eq!(record.visited_count, 5);
        assert!((record.execution_time - 1.5).abs() < 1e-9);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let value = serde_json::to_value(record()).unwrap();
        assert_eq!(value["algorithm"], "bfs");
        assert_eq!(value["gridSize"], "3x3");
        assert_eq!(value["pathFound"], true);
        assert_eq!(value["wallPositions"][0]["row"], 1);
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn memory_sink_clones_share_history() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();
        writer.record(&record()).unwrap();
        assert_eq!(sink.records().len(), 1);
    }

    #[test]
    fn json_lines_sink_appends() {
        let path = std::env::temp_dir().join(format!(
            "pathfinder-history-{}-{}.jsonl",
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));

        {
            let mut sink = JsonLinesSink::open(&path).unwrap();
            assert_eq!(sink.path(), path.as_path());
            sink.record(&record()).unwrap();
            sink.record(&record()).unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: SearchRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed.algorithm, Algorithm::BreadthFirst);
        assert_eq!(parsed.path_length, 4);

        std::fs::remove_file(&path).unwrap();
    }
}
