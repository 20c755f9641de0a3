use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::DirectoryError;

/// Sentinel returned when a college is missing from the directory.
pub const UNKNOWN_COLLEGE: &str = "序号不存在";

/// Lookup from short college name ("三院") to full display name, loaded once
/// at startup and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct CollegeDirectory {
    entries: HashMap<String, String>,
}

impl CollegeDirectory {
    /// Load from a headerless CSV of `short_name,full_name` rows.
    pub fn load(path: &Path) -> Result<Self, DirectoryError> {
        let file = File::open(path).map_err(|source| DirectoryError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DirectoryError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(reader);
        let mut entries = HashMap::new();
        for (i, result) in csv_reader.records().enumerate() {
            let record = result?;
            let short = record.get(0).unwrap_or("").trim();
            if short.is_empty() {
                continue;
            }
            let full = record
                .get(1)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .ok_or(DirectoryError::MissingName { row: i + 1 })?;
            entries.insert(short.to_string(), full.to_string());
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Full display name for a short college name; sentinel when absent.
    pub fn full_name(&self, college: &str) -> String {
        self.entries
            .get(college)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_COLLEGE.to_string())
    }
}
