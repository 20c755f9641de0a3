use serde::{Deserialize, Serialize};

/// One inspection assignment parsed from the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Short college name, e.g. "三院".
    pub college: String,
    /// Gender token, "男" or "女".
    pub gender: String,
    /// 2-3 numeric-string components: building, area, optional room.
    pub location: Vec<String>,
    /// Empty, or the mixed-room marker.
    pub remark: String,
}

/// `Record` with the college name replaced by its sort ordinal. Only exists
/// between the forward and backward ordinal translation around the sort;
/// downstream consumers never see the numeric form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedRecord {
    pub ordinal: u32,
    pub gender: String,
    pub location: Vec<String>,
    pub remark: String,
}

/// One spreadsheet row of the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Full display name resolved through the college directory.
    pub college: String,
    pub gender: String,
    pub building: i64,
    /// Area alone, or "area-room" when a room component is present.
    pub room: String,
    pub remark: String,
    /// Count of report rows sharing the same full college name.
    pub total: usize,
}
