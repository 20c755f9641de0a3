use std::collections::HashMap;

use crate::directory::CollegeDirectory;
use crate::models::{Record, ReportRow};

/// Flatten sorted records into display rows and attach per-college totals.
///
/// The building is the first location component (0 when unparseable), the
/// room display is the area alone or "area-room", and the total column is the
/// number of rows sharing the same full college name.
pub fn flatten_records(records: &[Record], directory: &CollegeDirectory) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = records
        .iter()
        .map(|r| {
            let building = r
                .location
                .first()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0);
            let area = r.location.get(1).map(String::as_str).unwrap_or("");
            let room = match r.location.get(2) {
                Some(room) => format!("{area}-{room}"),
                None => area.to_string(),
            };
            ReportRow {
                college: directory.full_name(&r.college),
                gender: r.gender.clone(),
                building,
                room,
                remark: r.remark.clone(),
                total: 0,
            }
        })
        .collect();

    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in &rows {
        *counts.entry(row.college.clone()).or_default() += 1;
    }
    for row in &mut rows {
        row.total = counts.get(&row.college).copied().unwrap_or(0);
    }
    rows
}
