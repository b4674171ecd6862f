use thiserror::Error;

use crate::domain::ports::outbound::SheetStoreError;

/// Errors surfaced to the person submitting a day's records. Nothing here
/// terminates the session; every variant is shown and the form stays as
/// it was so the submit can be retried.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("送信処理が既に実行中です")]
    AlreadyInFlight,
    #[error("送信できる作業がありません")]
    NothingToSubmit,
    #[error("送信に失敗しました: {0}")]
    Store(#[from] SheetStoreError),
}

impl SubmitError {
    /// Shown next to the error so the person knows what to check before
    /// retrying.
    pub fn remediation_hint(&self) -> Option<&'static str> {
        match self {
            SubmitError::Store(_) => {
                Some("Secretsのprivate_keyの改行(\\n)やシートの共有権限を確認してください。")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failures_carry_the_transport_text_and_a_hint() {
        let err = SubmitError::Store(SheetStoreError::Transport("connection refused".to_string()));
        assert_eq!(err.to_string(), "送信に失敗しました: connection refused");
        assert!(err.remediation_hint().is_some());

        assert!(SubmitError::AlreadyInFlight.remediation_hint().is_none());
    }
}
