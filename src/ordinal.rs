use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::{NumberedRecord, Record};

/// Suffix shared by all short college names ("三院", "十八院", ...).
pub const COLLEGE_SUFFIX: &str = "院";

/// The first eighteen Chinese numerals, indexed by ordinal minus one.
const ORDINAL_NAMES: [&str; 18] = [
    "一", "二", "三", "四", "五", "六", "七", "八", "九", "十", "十一", "十二", "十三", "十四",
    "十五", "十六", "十七", "十八",
];

static NAME_TO_ORDINAL: OnceLock<HashMap<&'static str, u32>> = OnceLock::new();

fn name_to_ordinal_map() -> &'static HashMap<&'static str, u32> {
    NAME_TO_ORDINAL.get_or_init(|| {
        ORDINAL_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| (*name, i as u32 + 1))
            .collect()
    })
}

/// "三院" -> 3. Unknown names collapse to 0, so all unknown colleges share
/// one sort key; kept as-is rather than surfacing an error.
pub fn ordinal_from_college(name: &str) -> u32 {
    let numeral = name.strip_suffix(COLLEGE_SUFFIX).unwrap_or(name);
    name_to_ordinal_map().get(numeral).copied().unwrap_or(0)
}

/// 3 -> "三院". An ordinal outside 1..=18 maps to the bare suffix.
pub fn college_from_ordinal(ordinal: u32) -> String {
    let numeral = ordinal
        .checked_sub(1)
        .and_then(|i| ORDINAL_NAMES.get(i as usize))
        .copied()
        .unwrap_or("");
    format!("{numeral}{COLLEGE_SUFFIX}")
}

/// Forward translation over a whole batch, applied just before sorting.
pub fn to_numbered(records: Vec<Record>) -> Vec<NumberedRecord> {
    records
        .into_iter()
        .map(|r| NumberedRecord {
            ordinal: ordinal_from_college(&r.college),
            gender: r.gender,
            location: r.location,
            remark: r.remark,
        })
        .collect()
}

/// Backward translation, applied right after sorting.
pub fn to_named(records: Vec<NumberedRecord>) -> Vec<Record> {
    records
        .into_iter()
        .map(|r| Record {
            college: college_from_ordinal(r.ordinal),
            gender: r.gender,
            location: r.location,
            remark: r.remark,
        })
        .collect()
}
