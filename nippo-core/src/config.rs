use std::str::FromStr;

use serde::Deserialize;
use strum::{Display, EnumString};

use crate::adapters::outbound::WorksheetNames;
use crate::domain::models::Department;
use crate::domain::services::SummaryMode;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub sheets: SheetsSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub department: Department,
}

#[derive(Deserialize, Clone)]
pub struct SheetsSettings {
    pub spreadsheet_id: String,
    pub main_worksheet: String,
    pub automated_worksheet: Option<String>,
    #[serde(default)]
    pub summary_mode: SummaryMode,
}

impl SheetsSettings {
    pub fn worksheet_names(&self) -> WorksheetNames {
        match &self.automated_worksheet {
            Some(automated) => WorksheetNames::with_automated(&self.main_worksheet, automated),
            None => WorksheetNames::single(&self.main_worksheet),
        }
    }
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    dotenvy::dotenv().ok();

    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let config_directory = base_path.join("config");

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .expect("Failed to parse APP_ENVIRONMENT");
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(config::File::from(
            config_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("NIPPO")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, EnumString)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_deserialize_from_yaml() {
        let yaml = r#"
application:
  department: "machining"
sheets:
  spreadsheet_id: "1XdfjbRSYWJhlYNB12okcUeVMXPzBLxsv85sw4dLoOjQ"
  main_worksheet: "シート1"
  automated_worksheet: "自動運転"
  summary_mode: "inline_column"
"#;

        let settings: Settings = config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.application.department, Department::Machining);
        assert_eq!(settings.sheets.summary_mode, SummaryMode::InlineColumn);
        let names = settings.sheets.worksheet_names();
        assert_eq!(names.main, "シート1");
        assert_eq!(names.automated.as_deref(), Some("自動運転"));
    }

    #[test]
    fn summary_mode_defaults_to_inline() {
        let yaml = r#"
application:
  department: "finishing"
sheets:
  spreadsheet_id: "1MXSg8qP_eT7lVczYpNB66sZGZP2NlWHIGz9jAWKH7Ss"
  main_worksheet: "シート1"
"#;

        let settings: Settings = config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.sheets.summary_mode, SummaryMode::InlineColumn);
        assert!(settings.sheets.worksheet_names().automated.is_none());
    }

    #[test]
    fn environment_names_parse_case_insensitively() {
        assert!(matches!(
            Environment::from_str("LOCAL").unwrap(),
            Environment::Local
        ));
        assert_eq!(Environment::Production.to_string(), "production");
    }
}
