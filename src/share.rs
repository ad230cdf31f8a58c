//! Share action with a graceful fallback chain: native share, then
//! clipboard, then a manual copyable prompt. A user who dismisses the native
//! share sheet has been answered; that path never falls through.

use tracing::debug;

use crate::catalog::ServiceRecord;
use crate::config::Branding;

/// What gets handed to the host share mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn for_record(record: &ServiceRecord, branding: &Branding) -> Self {
        Self {
            title: format!("{} - {}", record.name, branding.organization),
            text: format!("{} - Details from {}", record.name, branding.organization),
            url: format!(
                "{}{}",
                branding.site_url.trim_end_matches('/'),
                record.detail_route()
            ),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    /// The host exposes no native share mechanism.
    #[error("native share is not available on this host")]
    Unavailable,
    /// The mechanism exists and was shown, but the user declined.
    #[error("share dismissed by the user")]
    Cancelled,
    #[error("native share failed: {0}")]
    Failed(String),
}

#[derive(Debug, thiserror::Error)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

/// Host-provided native share mechanism.
pub trait ShareTarget {
    fn share(&mut self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// Host-provided clipboard access.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native share completed.
    Shared,
    /// The user dismissed the native share sheet. Terminal; no fallback ran.
    Dismissed,
    /// The URL was copied to the clipboard; the caller should confirm to the
    /// user.
    LinkCopied,
    /// Clipboard access failed too; the caller must show this URL in a
    /// user-visible copyable prompt.
    ManualPrompt(String),
}

/// Runs the fallback chain. Never returns an error: every failure either
/// terminates benignly (dismissal) or degrades to the next step.
pub fn share_with_fallback(
    target: &mut dyn ShareTarget,
    clipboard: &mut dyn Clipboard,
    payload: &SharePayload,
) -> ShareOutcome {
    match target.share(payload) {
        Ok(()) => ShareOutcome::Shared,
        Err(ShareError::Cancelled) => {
            debug!("share dismissed by user");
            ShareOutcome::Dismissed
        }
        Err(err) => {
            debug!(error = %err, "native share unavailable, trying clipboard");
            match clipboard.write_text(&payload.url) {
                Ok(()) => ShareOutcome::LinkCopied,
                Err(clip_err) => {
                    debug!(error = %clip_err, "clipboard write failed, showing manual prompt");
                    ShareOutcome::ManualPrompt(payload.url.clone())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedShare {
        result: Result<(), ShareError>,
        calls: usize,
    }

    impl ShareTarget for ScriptedShare {
        fn share(&mut self, _payload: &SharePayload) -> Result<(), ShareError> {
            self.calls += 1;
            std::mem::replace(&mut self.result, Ok(()))
        }
    }

    #[derive(Default)]
    struct RecordingClipboard {
        written: Vec<String>,
        fail: bool,
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError("denied".to_string()));
            }
            self.written.push(text.to_string());
            Ok(())
        }
    }

    fn payload() -> SharePayload {
        SharePayload {
            title: "Education Loan - Tirupati Agencies".to_string(),
            text: "Education Loan - Details from Tirupati Agencies".to_string(),
            url: "https://tirupatiagencies.in/loan/education-loan".to_string(),
        }
    }

    #[test]
    fn successful_share_skips_fallbacks() {
        let mut target = ScriptedShare { result: Ok(()), calls: 0 };
        let mut clipboard = RecordingClipboard::default();
        let outcome = share_with_fallback(&mut target, &mut clipboard, &payload());
        assert_eq!(outcome, ShareOutcome::Shared);
        assert_eq!(target.calls, 1);
        assert!(clipboard.written.is_empty());
    }

    #[test]
    fn cancellation_is_terminal_and_never_touches_clipboard() {
        let mut target = ScriptedShare {
            result: Err(ShareError::Cancelled),
            calls: 0,
        };
        let mut clipboard = RecordingClipboard::default();
        let outcome = share_with_fallback(&mut target, &mut clipboard, &payload());
        assert_eq!(outcome, ShareOutcome::Dismissed);
        assert!(clipboard.written.is_empty(), "dismissal must not copy the link");
    }

    #[test]
    fn unavailable_share_falls_back_to_clipboard() {
        let mut target = ScriptedShare {
            result: Err(ShareError::Unavailable),
            calls: 0,
        };
        let mut clipboard = RecordingClipboard::default();
        let outcome = share_with_fallback(&mut target, &mut clipboard, &payload());
        assert_eq!(outcome, ShareOutcome::LinkCopied);
        assert_eq!(clipboard.written, vec![payload().url]);
    }

    #[test]
    fn clipboard_failure_degrades_to_manual_prompt() {
        let mut target = ScriptedShare {
            result: Err(ShareError::Unavailable),
            calls: 0,
        };
        let mut clipboard = RecordingClipboard {
            fail: true,
            ..Default::default()
        };
        let outcome = share_with_fallback(&mut target, &mut clipboard, &payload());
        assert_eq!(outcome, ShareOutcome::ManualPrompt(payload().url));
    }
}
