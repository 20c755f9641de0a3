//! High-level workflow: read input, parse, sort, flatten, merge, export.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::AppConfig;
use crate::directory::CollegeDirectory;
use crate::export::xlsx::export_report;
use crate::merge::compute_merges;
use crate::ordinal::{to_named, to_numbered};
use crate::parse::parse_lines;
use crate::report::flatten_records;
use crate::sort::sort_records;

/// Outcome of a report run, for logging and tests.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub records: usize,
    pub rows: usize,
    pub merges: usize,
    pub out_path: String,
}

pub fn run(cfg: &AppConfig) -> Result<RunSummary> {
    let started = Instant::now();

    let text = fs::read_to_string(&cfg.input_path)
        .with_context(|| format!("reading {}", cfg.input_path))?;
    let records = parse_lines(&text);
    info!("parsed {} records from {}", records.len(), cfg.input_path);

    // The sort key needs the college as a number; translate back right after
    // so everything downstream sees names again.
    let mut numbered = to_numbered(records);
    sort_records(&mut numbered);
    let sorted = to_named(numbered);

    let directory = CollegeDirectory::load(Path::new(&cfg.directory_path))
        .with_context(|| format!("loading college directory {}", cfg.directory_path))?;
    info!("college directory has {} entries", directory.len());

    let rows = flatten_records(&sorted, &directory);
    for row in &rows {
        debug!(
            "{} | {} | {} | {} | {} | {}",
            row.college, row.gender, row.building, row.room, row.remark, row.total
        );
    }

    let merges = compute_merges(&rows);
    export_report(&cfg.out_path, &cfg.sheet_name, &rows, &merges)?;
    info!(
        "wrote {} rows ({} merge ranges) to {} in {:?}",
        rows.len(),
        merges.len(),
        cfg.out_path,
        started.elapsed()
    );

    Ok(RunSummary {
        records: sorted.len(),
        rows: rows.len(),
        merges: merges.len(),
        out_path: cfg.out_path.clone(),
    })
}
