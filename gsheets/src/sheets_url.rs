use std::env;

const DEFAULT_API_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

#[derive(Debug)]
pub struct SheetsURL(String);

impl AsRef<str> for SheetsURL {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SheetsURL {
    /// Creates a new SheetsURL from the environment variable `SHEETS_API_URL`,
    /// falling back to the public endpoint.
    pub fn from_env() -> Self {
        Self(env::var("SHEETS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()))
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    pub fn with_param(&self, key: &str, value: &str) -> Self {
        if self.0.contains('?') {
            Self(format!("{}&{}={}", self.0, key, value))
        } else {
            Self(format!("{}?{}={}", self.0, key, value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_and_params_compose() {
        let url = SheetsURL(DEFAULT_API_URL.to_string())
            .append_path("/sheet-id/values/range:append")
            .with_param("valueInputOption", "USER_ENTERED")
            .with_param("insertDataOption", "INSERT_ROWS");

        assert_eq!(
            url.as_ref(),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-id/values/range:append\
             ?valueInputOption=USER_ENTERED&insertDataOption=INSERT_ROWS"
        );
    }
}
