//! Vertical cell-merge computation over the sorted report rows.
//!
//! Three run-length trackers (college, gender, building) share one row
//! cursor. Because the rows are pre-sorted this is a single O(N) pass with no
//! backtracking. A college boundary force-closes any open gender or building
//! run, otherwise a run could straddle two colleges whose adjacent rows
//! happen to share the same gender or building value.

use crate::models::ReportRow;

/// Zero-based worksheet columns of the report layout.
pub const COLLEGE_COL: u16 = 0;
pub const GENDER_COL: u16 = 1;
pub const BUILDING_COL: u16 = 2;
pub const ROOM_COL: u16 = 3;
pub const REMARK_COL: u16 = 4;
pub const TOTAL_COL: u16 = 5;

/// First worksheet row holding data; row 0 is the header.
pub const FIRST_DATA_ROW: u32 = 1;

/// Inclusive vertical range of one column that renders as a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRange {
    pub col: u16,
    pub first_row: u32,
    pub last_row: u32,
}

/// Run-length tracker for one grouping column. While a run is open, `prior`
/// holds the value shared by rows `start_row..`.
#[derive(Debug)]
struct RunTracker {
    prior: Option<String>,
    start_row: u32,
}

impl RunTracker {
    fn new() -> Self {
        Self {
            prior: None,
            start_row: FIRST_DATA_ROW,
        }
    }

    fn differs(&self, value: &str) -> bool {
        self.prior.as_deref() != Some(value)
    }

    /// Range covered by the open run ending just before `row`, if that run
    /// spans more than one row. Single-row runs are never merged.
    fn closed_range(&self, row: u32) -> Option<(u32, u32)> {
        if self.prior.is_some() && row - 1 != self.start_row {
            Some((self.start_row, row - 1))
        } else {
            None
        }
    }

    fn start(&mut self, value: &str, row: u32) {
        self.prior = Some(value.to_string());
        self.start_row = row;
    }

    fn reset(&mut self, row: u32) {
        self.prior = None;
        self.start_row = row;
    }
}

/// Compute the merge plan for the college (mirrored to the total column),
/// gender, and building columns of already-ordered report rows.
pub fn compute_merges(rows: &[ReportRow]) -> Vec<MergeRange> {
    let mut ranges = Vec::new();
    let mut college = RunTracker::new();
    let mut gender = RunTracker::new();
    let mut building = RunTracker::new();

    for (i, report_row) in rows.iter().enumerate() {
        let row = FIRST_DATA_ROW + i as u32;
        let current_college = report_row.college.trim();
        let current_gender = report_row.gender.trim();
        let current_building = report_row.building.to_string();

        if college.differs(current_college) {
            if let Some((first_row, last_row)) = college.closed_range(row) {
                ranges.push(MergeRange {
                    col: COLLEGE_COL,
                    first_row,
                    last_row,
                });
                ranges.push(MergeRange {
                    col: TOTAL_COL,
                    first_row,
                    last_row,
                });
            }
            // A college boundary ends any open gender or building run, even
            // when the next college starts with the same gender or building.
            if let Some((first_row, last_row)) = gender.closed_range(row) {
                ranges.push(MergeRange {
                    col: GENDER_COL,
                    first_row,
                    last_row,
                });
            }
            if let Some((first_row, last_row)) = building.closed_range(row) {
                ranges.push(MergeRange {
                    col: BUILDING_COL,
                    first_row,
                    last_row,
                });
            }
            gender.reset(row);
            building.reset(row);
            college.start(current_college, row);
        }

        if gender.differs(current_gender) {
            if let Some((first_row, last_row)) = gender.closed_range(row) {
                ranges.push(MergeRange {
                    col: GENDER_COL,
                    first_row,
                    last_row,
                });
            }
            gender.start(current_gender, row);
        }

        if building.differs(&current_building) {
            if let Some((first_row, last_row)) = building.closed_range(row) {
                ranges.push(MergeRange {
                    col: BUILDING_COL,
                    first_row,
                    last_row,
                });
            }
            building.start(&current_building, row);
        }
    }

    // Flush the runs still open after the last row.
    let end = FIRST_DATA_ROW + rows.len() as u32;
    if let Some((first_row, last_row)) = college.closed_range(end) {
        ranges.push(MergeRange {
            col: COLLEGE_COL,
            first_row,
            last_row,
        });
        ranges.push(MergeRange {
            col: TOTAL_COL,
            first_row,
            last_row,
        });
    }
    if let Some((first_row, last_row)) = gender.closed_range(end) {
        ranges.push(MergeRange {
            col: GENDER_COL,
            first_row,
            last_row,
        });
    }
    if let Some((first_row, last_row)) = building.closed_range(end) {
        ranges.push(MergeRange {
            col: BUILDING_COL,
            first_row,
            last_row,
        });
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(college: &str, gender: &str, building: i64) -> ReportRow {
        ReportRow {
            college: college.into(),
            gender: gender.into(),
            building,
            room: "101".into(),
            remark: String::new(),
            total: 0,
        }
    }

    fn ranges_for(ranges: &[MergeRange], col: u16) -> Vec<(u32, u32)> {
        ranges
            .iter()
            .filter(|m| m.col == col)
            .map(|m| (m.first_row, m.last_row))
            .collect()
    }

    #[test]
    fn empty_rows_produce_no_ranges() {
        assert!(compute_merges(&[]).is_empty());
    }

    #[test]
    fn single_row_runs_are_not_merged() {
        let rows = vec![row("甲", "男", 1), row("乙", "女", 2)];
        assert!(compute_merges(&rows).is_empty());
    }

    // Rows 1-3 college X (gender Y,Y,Z), rows 4-5 college W with gender Y.
    // Worksheet rows start at 1 because row 0 is the header.
    #[test]
    fn gender_runs_do_not_straddle_a_college_boundary() {
        let rows = vec![
            row("X", "Y", 1),
            row("X", "Y", 2),
            row("X", "Z", 3),
            row("W", "Y", 4),
            row("W", "Y", 5),
        ];
        let ranges = compute_merges(&rows);
        assert_eq!(ranges_for(&ranges, COLLEGE_COL), vec![(1, 3), (4, 5)]);
        assert_eq!(ranges_for(&ranges, TOTAL_COL), vec![(1, 3), (4, 5)]);
        // Row 3's single-row Z run is dropped; rows 4-5 form a fresh Y run
        // rather than continuing the one from rows 1-2.
        assert_eq!(ranges_for(&ranges, GENDER_COL), vec![(1, 2), (4, 5)]);
        assert!(ranges_for(&ranges, BUILDING_COL).is_empty());
    }

    #[test]
    fn building_runs_close_on_college_boundary_too() {
        let rows = vec![
            row("X", "Y", 7),
            row("X", "Y", 7),
            row("W", "Y", 7),
            row("W", "Y", 7),
        ];
        let ranges = compute_merges(&rows);
        assert_eq!(ranges_for(&ranges, BUILDING_COL), vec![(1, 2), (3, 4)]);
        assert_eq!(ranges_for(&ranges, GENDER_COL), vec![(1, 2), (3, 4)]);
        assert_eq!(ranges_for(&ranges, COLLEGE_COL), vec![(1, 2), (3, 4)]);
    }

    #[test]
    fn building_runs_are_independent_of_gender_changes() {
        let rows = vec![row("X", "男", 4), row("X", "女", 4), row("X", "女", 4)];
        let ranges = compute_merges(&rows);
        assert_eq!(ranges_for(&ranges, BUILDING_COL), vec![(1, 3)]);
        assert_eq!(ranges_for(&ranges, GENDER_COL), vec![(2, 3)]);
    }

    #[test]
    fn final_runs_flush_through_the_last_row() {
        let rows = vec![row("X", "男", 1), row("X", "男", 1), row("X", "男", 1)];
        let ranges = compute_merges(&rows);
        assert_eq!(ranges_for(&ranges, COLLEGE_COL), vec![(1, 3)]);
        assert_eq!(ranges_for(&ranges, TOTAL_COL), vec![(1, 3)]);
        assert_eq!(ranges_for(&ranges, GENDER_COL), vec![(1, 3)]);
        assert_eq!(ranges_for(&ranges, BUILDING_COL), vec![(1, 3)]);
    }

    #[test]
    fn trailing_single_row_college_is_not_merged() {
        let rows = vec![row("X", "男", 1), row("X", "男", 2), row("W", "女", 3)];
        let ranges = compute_merges(&rows);
        assert_eq!(ranges_for(&ranges, COLLEGE_COL), vec![(1, 2)]);
        assert_eq!(ranges_for(&ranges, GENDER_COL), vec![(1, 2)]);
    }
}
