//! Blocking yes/no confirmation.

use std::io;

use dialoguer::Confirm;

use crate::error::ReportError;

/// Asks the operator a yes/no question.
///
/// Calls block the current thread until an answer is given; there is no
/// timeout.
#[cfg_attr(test, mockall::automock)]
pub trait Confirmer {
    /// Returns the operator's answer, or `default` when none was given.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Prompt`] if the terminal cannot be read.
    fn ask(&self, prompt: &str, default: bool) -> Result<bool, ReportError>;
}

/// Terminal confirmation backed by `dialoguer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn ask(&self, prompt: &str, default: bool) -> Result<bool, ReportError> {
        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact_opt();

        answer_or_default(answer, default)
    }
}

/// Without an attached terminal the question cannot be asked, so it gets
/// the default answer.
fn answer_or_default(
    answer: Result<Option<bool>, dialoguer::Error>,
    default: bool,
) -> Result<bool, ReportError> {
    match answer {
        Ok(answer) => Ok(answer.unwrap_or(default)),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::NotConnected => {
            tracing::debug!(default, "No terminal attached, using default answer");
            Ok(default)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_error(kind: io::ErrorKind) -> dialoguer::Error {
        dialoguer::Error::IO(io::Error::new(kind, "not a terminal"))
    }

    #[test]
    fn test_given_answer_wins() {
        assert!(answer_or_default(Ok(Some(true)), false).unwrap());
        assert!(!answer_or_default(Ok(Some(false)), true).unwrap());
    }

    #[test]
    fn test_dismissed_prompt_uses_default() {
        assert!(!answer_or_default(Ok(None), false).unwrap());
        assert!(answer_or_default(Ok(None), true).unwrap());
    }

    #[test]
    fn test_missing_terminal_uses_default() {
        let answer = answer_or_default(Err(io_error(io::ErrorKind::NotConnected)), false);
        assert!(!answer.unwrap());
    }

    #[test]
    fn test_other_terminal_errors_surface() {
        let err = answer_or_default(Err(io_error(io::ErrorKind::BrokenPipe)), false).unwrap_err();
        assert!(matches!(err, ReportError::Prompt(_)));
    }
}
