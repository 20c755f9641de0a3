use log::{debug, warn};

use crate::models::Record;

pub const FIELD_DELIMITER: char = '_';
pub const LOCATION_DELIMITER: char = '-';
pub const SHARED_ROOM_SEPARATOR: char = '&';
/// Raw remark value meaning "nothing to report".
pub const NO_REMARK: &str = "无";
/// Marker written for any non-empty remark, including shared rooms.
pub const MIXED_ROOM_MARKER: &str = "混合宿舍";

/// Parse raw inspection text, one entry per line, into records.
///
/// Lines with 3 or fewer fields are dropped without error. A shared-room
/// remark ("A&B" where A is the line's own college) expands into a second
/// record for college B with the same gender and location; expansion reads
/// the raw remark before normalization and never applies to derived records.
pub fn parse_lines(text: &str) -> Vec<Record> {
    let mut records = Vec::new();
    for raw in text.lines() {
        let line = raw.trim();
        let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if parts.len() <= 3 {
            if !line.is_empty() {
                debug!("dropping short line ({} fields): {}", parts.len(), line);
            }
            continue;
        }

        let college = parts[0];
        let gender = parts[1];
        let location: Vec<String> = parts[2]
            .split(LOCATION_DELIMITER)
            .map(str::to_string)
            .collect();
        let raw_remark = parts[3];
        let remark = normalize_remark(raw_remark);

        records.push(Record {
            college: college.to_string(),
            gender: gender.to_string(),
            location: location.clone(),
            remark: remark.clone(),
        });

        if let Some(partner) = shared_room_partner(college, raw_remark) {
            records.push(Record {
                college: partner.to_string(),
                gender: gender.to_string(),
                location,
                remark,
            });
        }
    }
    records
}

fn normalize_remark(raw: &str) -> String {
    if raw == NO_REMARK {
        String::new()
    } else {
        MIXED_ROOM_MARKER.to_string()
    }
}

/// The second college named in a shared-room remark, if the remark has the
/// form `<own college>&<partner>`. Remarks naming more than two colleges are
/// rejected with a warning rather than silently truncated.
fn shared_room_partner<'a>(college: &str, raw_remark: &'a str) -> Option<&'a str> {
    let (before, after) = raw_remark.split_once(SHARED_ROOM_SEPARATOR)?;
    if after.contains(SHARED_ROOM_SEPARATOR) {
        warn!("remark names more than two colleges, not expanding: {raw_remark}");
        return None;
    }
    if before != college {
        return None;
    }
    Some(after)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_line() {
        let records = parse_lines("三院_男_5-2-301_无");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].college, "三院");
        assert_eq!(records[0].gender, "男");
        assert_eq!(records[0].location, vec!["5", "2", "301"]);
        assert_eq!(records[0].remark, "");
    }

    #[test]
    fn location_may_omit_room() {
        let records = parse_lines("七院_女_12-404_无");
        assert_eq!(records[0].location, vec!["12", "404"]);
    }

    #[test]
    fn drops_short_lines() {
        let records = parse_lines("三院_男_1-2-3\n\n五院_女_4-5_无\n坏行\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].college, "五院");
    }

    #[test]
    fn expands_shared_room() {
        let records = parse_lines("三院_男_1-2-3_三院&五院");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].college, "三院");
        assert_eq!(records[1].college, "五院");
        for r in &records {
            assert_eq!(r.gender, "男");
            assert_eq!(r.location, vec!["1", "2", "3"]);
            assert_eq!(r.remark, MIXED_ROOM_MARKER);
        }
    }

    #[test]
    fn no_expansion_when_prefix_is_not_own_college() {
        let records = parse_lines("三院_男_1-2-3_四院&五院");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].college, "三院");
        assert_eq!(records[0].remark, MIXED_ROOM_MARKER);
    }

    #[test]
    fn rejects_remark_with_multiple_separators() {
        let records = parse_lines("三院_男_1-2-3_三院&五院&七院");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].college, "三院");
    }

    #[test]
    fn non_none_remark_becomes_mixed_marker() {
        let records = parse_lines("一院_女_3-101_临时借用");
        assert_eq!(records[0].remark, MIXED_ROOM_MARKER);
    }

    #[test]
    fn parse_is_idempotent() {
        let text = "三院_男_1-2-3_三院&五院\n七院_女_12-404_无\n短行_缺字段\n";
        assert_eq!(parse_lines(text), parse_lines(text));
    }
}
