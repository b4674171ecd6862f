use std::collections::HashMap;

use time::Date;

use crate::domain::ports::outbound::FieldSource;

/// Scripted stand-in for the rendering layer: answers field requests from
/// a key→value map and falls back to each field's default, the way an
/// untouched widget would.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFieldSource {
    values: HashMap<String, String>,
}

impl ScriptedFieldSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl FieldSource for ScriptedFieldSource {
    fn select(&self, _label: &str, options: &[&str], key: &str) -> String {
        match self.values.get(key) {
            Some(value) => value.clone(),
            None => options.first().copied().unwrap_or_default().to_string(),
        }
    }

    fn text(&self, _label: &str, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn date(&self, _label: &str, key: &str, default: Date) -> Date {
        self.values
            .get(key)
            .and_then(|raw| {
                let format = time::format_description::parse("[year]-[month]-[day]").ok()?;
                Date::parse(raw, &format).ok()
            })
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::PLEASE_SELECT;
    use time::macros::date;

    #[test]
    fn unscripted_selects_fall_back_to_the_sentinel() {
        let fields = ScriptedFieldSource::new();
        let picked = fields.select("名前", &[PLEASE_SELECT, "鈴木"], "name");
        assert_eq!(picked, PLEASE_SELECT);
    }

    #[test]
    fn scripted_values_win_over_defaults() {
        let fields = ScriptedFieldSource::new()
            .with_value("number_1", "51a111")
            .with_value("day", "2025-01-10");

        assert_eq!(fields.text("工番", "number_1", ""), "51a111");
        assert_eq!(fields.text("工番", "number_2", "既定"), "既定");
        assert_eq!(
            fields.date("日付", "day", date!(2024 - 12 - 31)),
            date!(2025 - 01 - 10)
        );
    }

    #[test]
    fn bad_date_text_keeps_the_default() {
        let fields = ScriptedFieldSource::new().with_value("day", "not a date");
        assert_eq!(
            fields.date("日付", "day", date!(2025 - 01 - 10)),
            date!(2025 - 01 - 10)
        );
    }
}
