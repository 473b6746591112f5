use chrono::{DateTime, Duration, Utc};
use log::debug;

use crate::config;

/// What the host does when its close timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseStep {
    /// Fade-out finished; the popup form can be reset.
    Closed,
    /// Timer ran early; re-arm for this many milliseconds.
    Wait(u32),
    /// Nothing was closing.
    Idle,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PopupState {
    #[default]
    Closed,
    Open,
    /// Fade-out running; the dialog is still rendered.
    Closing,
}

/// Visibility lifecycle of the promotional dialog.
///
/// Closed -> Open on any trigger, Open -> Closing on close, and Closing ->
/// Closed once `CLOSE_TRANSITION_MS` has elapsed. The host resets the popup
/// form only when `finish_closing` reports the last transition.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PopupController {
    state: PopupState,
    closing_since: Option<DateTime<Utc>>,
}

impl PopupController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PopupState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state != PopupState::Closed
    }

    pub fn is_closing(&self) -> bool {
        self.state == PopupState::Closing
    }

    /// No-op unless Closed, so repeated triggers are harmless.
    pub fn open(&mut self) -> bool {
        if self.state != PopupState::Closed {
            return false;
        }
        debug!("Popup opening");
        self.state = PopupState::Open;
        true
    }

    pub fn close(&mut self, now: DateTime<Utc>) -> bool {
        if self.state != PopupState::Open {
            return false;
        }
        debug!("Popup closing");
        self.state = PopupState::Closing;
        self.closing_since = Some(now);
        true
    }

    /// Milliseconds left in the fade-out, or `None` when not closing.
    pub fn remaining_close_ms(&self, now: DateTime<Utc>) -> Option<u32> {
        let since = self.closing_since?;
        let window = Duration::milliseconds(i64::from(config::CLOSE_TRANSITION_MS));
        let left = (since + window - now).num_milliseconds().max(0);
        Some(left as u32)
    }

    /// Closing -> Closed, only once the full transition has elapsed.
    pub fn finish_closing(&mut self, now: DateTime<Utc>) -> bool {
        if self.state != PopupState::Closing || self.remaining_close_ms(now) != Some(0) {
            return false;
        }
        debug!("Popup closed");
        self.state = PopupState::Closed;
        self.closing_since = None;
        true
    }

    /// Handles a fired close timer. Never reports `Wait(0)`.
    pub fn advance_close(&mut self, now: DateTime<Utc>) -> CloseStep {
        if self.finish_closing(now) {
            return CloseStep::Closed;
        }
        match self.remaining_close_ms(now) {
            Some(left) if self.is_closing() => CloseStep::Wait(left.max(1)),
            _ => CloseStep::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::models::{FormField, LeadForm, SubmissionState};
    use crate::lead::pipeline::LeadPipeline;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn ms(n: i64) -> Duration {
        Duration::milliseconds(n)
    }

    #[test]
    fn open_is_idempotent() {
        let mut popup = PopupController::new();
        assert!(popup.open());
        assert!(!popup.open());
        assert_eq!(popup.state(), PopupState::Open);
    }

    #[test]
    fn triggers_do_not_interrupt_the_fade_out() {
        let mut popup = PopupController::new();
        popup.open();
        popup.close(t0());

        assert!(!popup.open());
        assert_eq!(popup.state(), PopupState::Closing);
    }

    #[test]
    fn close_only_applies_to_an_open_popup() {
        let mut popup = PopupController::new();
        assert!(!popup.close(t0()));
        assert_eq!(popup.state(), PopupState::Closed);
        assert!(!popup.finish_closing(t0() + ms(5_000)));
    }

    #[test]
    fn closing_lasts_at_least_the_transition() {
        let mut popup = PopupController::new();
        popup.open();
        assert!(popup.close(t0()));
        assert_eq!(popup.state(), PopupState::Closing);
        assert!(popup.is_visible());

        assert!(!popup.finish_closing(t0() + ms(999)));
        assert_eq!(popup.remaining_close_ms(t0() + ms(999)), Some(1));
        assert_eq!(popup.state(), PopupState::Closing);

        assert!(popup.finish_closing(t0() + ms(1_000)));
        assert_eq!(popup.state(), PopupState::Closed);
        assert_eq!(popup.remaining_close_ms(t0() + ms(1_000)), None);
    }

    #[test]
    fn early_close_timer_waits_out_the_rest() {
        let mut popup = PopupController::new();
        popup.open();
        popup.close(t0());

        assert_eq!(popup.advance_close(t0() + ms(998)), CloseStep::Wait(2));
        assert_eq!(popup.state(), PopupState::Closing);

        assert_eq!(popup.advance_close(t0() + ms(1_000)), CloseStep::Closed);
        assert_eq!(popup.state(), PopupState::Closed);

        assert_eq!(popup.advance_close(t0() + ms(1_500)), CloseStep::Idle);
    }

    #[test]
    fn stray_close_timer_is_ignored() {
        let mut popup = PopupController::new();
        assert_eq!(popup.advance_close(t0()), CloseStep::Idle);

        popup.open();
        assert_eq!(popup.advance_close(t0()), CloseStep::Idle);
        assert_eq!(popup.state(), PopupState::Open);
    }

    #[test]
    fn popup_can_reopen_after_closing() {
        let mut popup = PopupController::new();
        popup.open();
        popup.close(t0());
        popup.finish_closing(t0() + ms(1_200));

        assert!(popup.open());
        assert_eq!(popup.state(), PopupState::Open);
    }

    #[test]
    fn form_survives_fade_out_and_resets_when_closed() {
        let mut popup = PopupController::new();
        let mut lead = LeadPipeline::new();
        popup.open();
        lead.update_field(FormField::Name, "Ane".to_string());
        lead.update_field(FormField::Email, "ane@example.com".to_string());
        lead.update_field(FormField::Phone, "600000000".to_string());
        lead.update_field(FormField::Comments, "Llamadme por la tarde".to_string());
        let typed = lead.clone();

        popup.close(t0());
        if popup.finish_closing(t0() + ms(500)) {
            lead.reset();
        }
        assert_eq!(lead, typed);

        if popup.finish_closing(t0() + ms(1_000)) {
            lead.reset();
        }
        assert_eq!(lead.form(), &LeadForm::default());
        assert_eq!(lead.state(), SubmissionState::Idle);
    }
}
