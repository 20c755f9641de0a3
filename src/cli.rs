use clap::Parser;

use crate::config::AppConfig;
use crate::error::ConfigError;

#[derive(Parser, Debug)]
#[command(
    name = "dormstat",
    version,
    about = "Dormitory hygiene inspection report generator",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Input text file; defaults to the current month's info file
    #[arg(long = "input", value_name = "PATH", env = "DORMSTAT_INPUT")]
    pub input: Option<String>,
    /// College directory CSV (short_name,full_name)
    #[arg(long = "directory", value_name = "PATH", env = "DORMSTAT_DIRECTORY")]
    pub directory: Option<String>,
    /// Output .xlsx path; defaults to the current month's report path
    #[arg(long = "out", value_name = "PATH", env = "DORMSTAT_OUT")]
    pub out: Option<String>,
    /// Worksheet name
    #[arg(long = "sheet-name", value_name = "NAME", default_value = "Sheet1")]
    pub sheet_name: String,
}

impl Cli {
    pub fn to_app_config(&self) -> Result<AppConfig, ConfigError> {
        let mut cfg = AppConfig::default();
        if let Some(ref path) = self.input {
            cfg.input_path = path.clone();
        }
        if let Some(ref path) = self.directory {
            cfg.directory_path = path.clone();
        }
        if let Some(ref path) = self.out {
            cfg.out_path = path.clone();
        }
        cfg.sheet_name = self.sheet_name.clone();
        cfg.validate()?;
        Ok(cfg)
    }
}

pub fn parse_cli_to_app_config() -> Result<AppConfig, ConfigError> {
    let cli = Cli::parse();
    cli.to_app_config()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_flags() {
        let cli = Cli::try_parse_from(["dormstat"]).unwrap();
        let cfg = cli.to_app_config().unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "dormstat",
            "--input",
            "in.txt",
            "--directory",
            "dir.csv",
            "--out",
            "out.xlsx",
            "--sheet-name",
            "十月",
        ])
        .unwrap();
        let cfg = cli.to_app_config().unwrap();
        assert_eq!(cfg.input_path, "in.txt");
        assert_eq!(cfg.directory_path, "dir.csv");
        assert_eq!(cfg.out_path, "out.xlsx");
        assert_eq!(cfg.sheet_name, "十月");
    }

    #[test]
    fn invalid_out_path_is_rejected() {
        let cli = Cli::try_parse_from(["dormstat", "--out", "out.txt"]).unwrap();
        assert!(cli.to_app_config().is_err());
    }
}
