use time::Date;

/// The field-collection collaborator: whatever renders inputs and hands
/// back their current values.
///
/// Keys are namespaced per slot (`customer_3`, `time_3`, …) so each slot's
/// state is independently addressable by the rendering layer.
pub trait FieldSource {
    /// Single choice from an option set. The first option is always the
    /// please-select sentinel.
    fn select(&self, label: &str, options: &[&str], key: &str) -> String;

    /// Free-text entry.
    fn text(&self, label: &str, key: &str, default: &str) -> String;

    /// Calendar date entry; the collaborator guarantees a valid date.
    fn date(&self, label: &str, key: &str, default: Date) -> Date;
}
