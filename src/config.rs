use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Application configuration. Defaults follow the monthly file layout:
/// input under `files/dorm_hygiene_info/`, output under
/// `files/dorm_hygiene_statistics/<year>/`, both named after the current
/// year and English month abbreviation.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub input_path: String,
    pub directory_path: String,
    pub out_path: String,
    pub sheet_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let now = Local::now();
        let year = now.format("%Y");
        let month_abbr = now.format("%b");
        Self {
            input_path: format!("files/dorm_hygiene_info/{year} {month_abbr} Info.txt"),
            directory_path: "files/college_directory.csv".into(),
            out_path: format!(
                "files/dorm_hygiene_statistics/{year}/{year} {month_abbr} Dorm Hygiene Statistics.xlsx"
            ),
            sheet_name: "Sheet1".into(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_path.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "input_path",
            });
        }
        if self.directory_path.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "directory_path",
            });
        }
        if self.out_path.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "out_path" });
        }
        if !self.out_path.ends_with(".xlsx") {
            return Err(ConfigError::InvalidValue {
                field: "out_path",
                reason: format!("{} is not an .xlsx path", self.out_path),
            });
        }
        // Excel limits worksheet names to 31 characters.
        if self.sheet_name.trim().is_empty() || self.sheet_name.chars().count() > 31 {
            return Err(ConfigError::InvalidValue {
                field: "sheet_name",
                reason: "must be 1-31 characters".into(),
            });
        }
        Ok(())
    }
}
