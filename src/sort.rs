use crate::models::NumberedRecord;

/// Gender token that sorts first.
pub const MALE: &str = "男";

fn numeric(component: Option<&String>) -> i64 {
    component.and_then(|s| s.parse().ok()).unwrap_or(0)
}

/// Composite sort key: college ordinal, gender (male first), building, area,
/// room. Missing or unparseable location components rank as 0.
pub fn sort_key(record: &NumberedRecord) -> (u32, u8, i64, i64, i64) {
    let gender_rank = if record.gender == MALE { 0 } else { 1 };
    (
        record.ordinal,
        gender_rank,
        numeric(record.location.first()),
        numeric(record.location.get(1)),
        numeric(record.location.get(2)),
    )
}

/// Stable sort, so records with equal keys keep their input order.
pub fn sort_records(records: &mut [NumberedRecord]) {
    records.sort_by_key(sort_key);
}
