use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Result;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};

use crate::merge::{
    BUILDING_COL, COLLEGE_COL, FIRST_DATA_ROW, GENDER_COL, MergeRange, REMARK_COL, ROOM_COL,
    TOTAL_COL,
};
use crate::models::ReportRow;

const HEADERS: [&str; 6] = ["学院", "性别", "楼栋", "宿舍号", "备注", "总计"];
const COLUMN_WIDTHS: [f64; 6] = [22.0, 6.5, 6.0, 10.5, 16.0, 8.38];

fn ensure_parent_dir(path: &str) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn header_format() -> Format {
    cell_format().set_bold()
}

fn cell_format() -> Format {
    Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

/// Cells covered by a merge range; written through `merge_range` instead of
/// cell by cell.
fn merged_cells(merges: &[MergeRange]) -> HashSet<(u32, u16)> {
    let mut cells = HashSet::new();
    for m in merges {
        for row in m.first_row..=m.last_row {
            cells.insert((row, m.col));
        }
    }
    cells
}

fn write_rows(ws: &mut Worksheet, rows: &[ReportRow], merges: &[MergeRange]) -> Result<()> {
    let header = header_format();
    let cell = cell_format();

    for (c, title) in HEADERS.iter().enumerate() {
        ws.write_string_with_format(0, c as u16, *title, &header)?;
    }
    for (c, width) in COLUMN_WIDTHS.iter().enumerate() {
        ws.set_column_width(c as u16, *width)?;
    }

    let covered = merged_cells(merges);
    for (i, row) in rows.iter().enumerate() {
        let r = FIRST_DATA_ROW + i as u32;
        if !covered.contains(&(r, COLLEGE_COL)) {
            ws.write_string_with_format(r, COLLEGE_COL, &row.college, &cell)?;
        }
        if !covered.contains(&(r, GENDER_COL)) {
            ws.write_string_with_format(r, GENDER_COL, &row.gender, &cell)?;
        }
        if !covered.contains(&(r, BUILDING_COL)) {
            ws.write_number_with_format(r, BUILDING_COL, row.building as f64, &cell)?;
        }
        ws.write_string_with_format(r, ROOM_COL, &row.room, &cell)?;
        ws.write_string_with_format(r, REMARK_COL, &row.remark, &cell)?;
        if !covered.contains(&(r, TOTAL_COL)) {
            ws.write_number_with_format(r, TOTAL_COL, row.total as f64, &cell)?;
        }
    }

    for m in merges {
        // The merged cell shows the value of the run's first row.
        let first = rows.get((m.first_row - FIRST_DATA_ROW) as usize);
        match m.col {
            COLLEGE_COL => {
                let value = first.map(|r| r.college.as_str()).unwrap_or("");
                ws.merge_range(m.first_row, m.col, m.last_row, m.col, value, &cell)?;
            }
            GENDER_COL => {
                let value = first.map(|r| r.gender.as_str()).unwrap_or("");
                ws.merge_range(m.first_row, m.col, m.last_row, m.col, value, &cell)?;
            }
            BUILDING_COL => {
                let value = first.map(|r| r.building).unwrap_or(0);
                ws.merge_range(m.first_row, m.col, m.last_row, m.col, "", &cell)?;
                ws.write_number_with_format(m.first_row, m.col, value as f64, &cell)?;
            }
            TOTAL_COL => {
                let value = first.map(|r| r.total).unwrap_or(0);
                ws.merge_range(m.first_row, m.col, m.last_row, m.col, "", &cell)?;
                ws.write_number_with_format(m.first_row, m.col, value as f64, &cell)?;
            }
            _ => {}
        }
    }

    Ok(())
}

/// Render the report rows and merge plan to an xlsx file, creating parent
/// directories as needed.
pub fn export_report(
    out_path: &str,
    sheet_name: &str,
    rows: &[ReportRow],
    merges: &[MergeRange],
) -> Result<()> {
    ensure_parent_dir(out_path)?;

    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name(sheet_name)?;
    write_rows(ws, rows, merges)?;

    workbook.save(out_path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::compute_merges;

    fn row(college: &str, gender: &str, building: i64, room: &str, total: usize) -> ReportRow {
        ReportRow {
            college: college.into(),
            gender: gender.into(),
            building,
            room: room.into(),
            remark: String::new(),
            total,
        }
    }

    #[test]
    fn write_xlsx_basic() {
        let rows = vec![
            row("第三学院", "男", 1, "2-301", 3),
            row("第三学院", "男", 1, "2-302", 3),
            row("第三学院", "女", 4, "101", 3),
            row("第五学院", "女", 4, "505", 1),
        ];
        let merges = compute_merges(&rows);
        let out = "./target/test_dorm_report.xlsx";
        let _ = std::fs::remove_file(out);
        let res = export_report(out, "Sheet1", &rows, &merges);
        assert!(res.is_ok(), "{:?}", res);
        let meta = std::fs::metadata(out).unwrap();
        assert!(meta.len() > 0);
    }

    #[test]
    fn write_xlsx_empty_rows() {
        let out = "./target/test_dorm_report_empty.xlsx";
        let _ = std::fs::remove_file(out);
        assert!(export_report(out, "Sheet1", &[], &[]).is_ok());
    }
}
