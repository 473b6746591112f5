use chrono::Utc;
use log::{error, info, warn};

use crate::config;
use crate::lead::challenge::ChallengeProvider;
use crate::lead::models::{FormField, LeadForm, LeadRecord, SubmissionState, SubmitError};
use crate::lead::webhook::LeadSink;

/// Snapshot handed out by `begin_submit`. The attempt number lets a late
/// result be dropped if the form was reset while the request was in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTicket {
    pub attempt: u64,
    pub form: LeadForm,
}

/// State of one lead form instance: typed fields plus submission progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadPipeline {
    form: LeadForm,
    state: SubmissionState,
    notice: Option<SubmitError>,
    submitted_name: Option<String>,
    attempt: u64,
}

impl LeadPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Error from the last failed attempt, until dismissed or retried.
    pub fn notice(&self) -> Option<&SubmitError> {
        self.notice.as_ref()
    }

    pub fn thank_you_name(&self) -> Option<&str> {
        self.submitted_name.as_deref()
    }

    /// Returns false when the update was ignored (form already submitted).
    pub fn update_field(&mut self, field: FormField, value: String) -> bool {
        if self.state == SubmissionState::Submitted {
            return false;
        }
        self.form.set(field, value);
        true
    }

    /// Idle -> Submitting. `None` means nothing should be sent: an attempt
    /// is already in flight, the lead was already delivered, or a required
    /// field is blank.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if self.state != SubmissionState::Idle {
            warn!("Ignoring submit while {:?}", self.state);
            return None;
        }
        if let Some(field) = self.form.missing_required() {
            warn!("Ignoring submit, '{}' is empty", field.input_name());
            return None;
        }

        self.attempt += 1;
        self.state = SubmissionState::Submitting;
        self.notice = None;
        Some(SubmitTicket {
            attempt: self.attempt,
            form: self.form.clone(),
        })
    }

    /// Applies the outcome of `attempt`. Stale attempts are ignored and
    /// return false.
    pub fn finish(&mut self, attempt: u64, result: Result<(), SubmitError>) -> bool {
        if attempt != self.attempt || self.state != SubmissionState::Submitting {
            warn!("Dropping result of stale submit attempt {}", attempt);
            return false;
        }

        match result {
            Ok(()) => {
                self.state = SubmissionState::Submitted;
                self.submitted_name = Some(self.form.name.clone());
            }
            Err(e) => {
                self.state = SubmissionState::Idle;
                self.notice = Some(e);
            }
        }
        true
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Back to an empty Idle form. In-flight attempts become stale.
    pub fn reset(&mut self) {
        let attempt = self.attempt;
        *self = Self {
            attempt,
            ..Self::default()
        };
    }
}

/// Acquires a fresh challenge token and posts the lead once.
pub async fn deliver_lead<C, S>(challenge: &C, sink: &S, form: LeadForm) -> Result<(), SubmitError>
where
    C: ChallengeProvider,
    S: LeadSink,
{
    let token = match challenge.acquire_challenge_token(config::SUBMIT_ACTION).await {
        Some(token) => token,
        None => {
            error!("Form submission error: {}", SubmitError::TokenAcquisition);
            return Err(SubmitError::TokenAcquisition);
        }
    };

    let record = LeadRecord::new(form, token, Utc::now());
    match sink.submit_lead(&record).await {
        Ok(()) => {
            info!("Lead submitted from source '{}'", record.source);
            Ok(())
        }
        Err(e) => {
            error!("Form submission error: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct FakeChallenge {
        token: Option<&'static str>,
        calls: Cell<u32>,
    }

    impl FakeChallenge {
        fn issuing(token: &'static str) -> Self {
            Self { token: Some(token), calls: Cell::new(0) }
        }

        fn failing() -> Self {
            Self { token: None, calls: Cell::new(0) }
        }
    }

    impl ChallengeProvider for FakeChallenge {
        async fn acquire_challenge_token(&self, action: &str) -> Option<String> {
            assert_eq!(action, "submit");
            self.calls.set(self.calls.get() + 1);
            self.token.map(str::to_string)
        }
    }

    struct FakeSink {
        status: Option<u16>,
        posted: RefCell<Vec<serde_json::Value>>,
    }

    impl FakeSink {
        fn responding(status: u16) -> Self {
            Self { status: Some(status), posted: RefCell::new(Vec::new()) }
        }

        fn unreachable() -> Self {
            Self { status: None, posted: RefCell::new(Vec::new()) }
        }
    }

    impl LeadSink for FakeSink {
        async fn submit_lead(&self, record: &LeadRecord) -> Result<(), SubmitError> {
            self.posted.borrow_mut().push(serde_json::to_value(record).unwrap());
            match self.status {
                Some(status) => crate::lead::webhook::check_status(status),
                None => Err(SubmitError::NetworkOrServer("connection refused".to_string())),
            }
        }
    }

    fn filled() -> LeadPipeline {
        let mut pipeline = LeadPipeline::new();
        pipeline.update_field(FormField::Name, "Aitor".to_string());
        pipeline.update_field(FormField::Email, "aitor@example.com".to_string());
        pipeline.update_field(FormField::Phone, "944000000".to_string());
        pipeline
    }

    fn run(pipeline: &mut LeadPipeline, challenge: &FakeChallenge, sink: &FakeSink) -> bool {
        match pipeline.begin_submit() {
            Some(ticket) => {
                let result = block_on(deliver_lead(challenge, sink, ticket.form));
                pipeline.finish(ticket.attempt, result)
            }
            None => false,
        }
    }

    #[test]
    fn successful_submission_keeps_name_for_thank_you() {
        let mut pipeline = filled();
        let challenge = FakeChallenge::issuing("tok");
        let sink = FakeSink::responding(200);

        assert!(run(&mut pipeline, &challenge, &sink));

        assert_eq!(pipeline.state(), SubmissionState::Submitted);
        assert_eq!(pipeline.thank_you_name(), Some("Aitor"));
        assert!(pipeline.notice().is_none());

        let posted = sink.posted.borrow();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0]["name"], "Aitor");
        assert_eq!(posted[0]["recaptchaToken"], "tok");
        assert_eq!(posted[0]["source"], "website_form");
    }

    #[test]
    fn missing_token_returns_to_idle_without_posting() {
        let mut pipeline = filled();
        let before = pipeline.form().clone();
        let challenge = FakeChallenge::failing();
        let sink = FakeSink::responding(200);

        assert!(run(&mut pipeline, &challenge, &sink));

        assert_eq!(pipeline.state(), SubmissionState::Idle);
        assert_eq!(pipeline.form(), &before);
        assert_eq!(pipeline.notice(), Some(&SubmitError::TokenAcquisition));
        assert!(sink.posted.borrow().is_empty());
    }

    #[test]
    fn server_error_and_network_error_look_the_same() {
        let mut rejected = filled();
        run(&mut rejected, &FakeChallenge::issuing("a"), &FakeSink::responding(500));

        let mut offline = filled();
        run(&mut offline, &FakeChallenge::issuing("b"), &FakeSink::unreachable());

        for pipeline in [&rejected, &offline] {
            assert_eq!(pipeline.state(), SubmissionState::Idle);
            assert_eq!(pipeline.form().name, "Aitor");
            let notice = pipeline.notice().unwrap();
            assert!(matches!(notice, SubmitError::NetworkOrServer(_)));
            assert_eq!(
                notice.user_message(),
                "Hubo un error al enviar el formulario. Por favor, inténtelo de nuevo."
            );
        }
    }

    #[test]
    fn second_submit_while_in_flight_sends_nothing() {
        let mut pipeline = filled();
        let challenge = FakeChallenge::issuing("tok");
        let sink = FakeSink::responding(200);

        let first = pipeline.begin_submit().unwrap();
        assert!(pipeline.is_submitting());
        assert!(pipeline.begin_submit().is_none());
        assert!(pipeline.begin_submit().is_none());

        let result = block_on(deliver_lead(&challenge, &sink, first.form));
        pipeline.finish(first.attempt, result);

        assert_eq!(sink.posted.borrow().len(), 1);
        assert_eq!(challenge.calls.get(), 1);
    }

    #[test]
    fn each_retry_gets_a_fresh_token() {
        let mut pipeline = filled();
        let challenge = FakeChallenge::issuing("tok");
        let sink = FakeSink::responding(503);

        run(&mut pipeline, &challenge, &sink);
        run(&mut pipeline, &challenge, &sink);

        assert_eq!(challenge.calls.get(), 2);
        assert_eq!(sink.posted.borrow().len(), 2);
        assert_eq!(pipeline.state(), SubmissionState::Idle);
    }

    #[test]
    fn retry_clears_previous_notice() {
        let mut pipeline = filled();
        run(&mut pipeline, &FakeChallenge::failing(), &FakeSink::responding(200));
        assert!(pipeline.notice().is_some());

        run(&mut pipeline, &FakeChallenge::issuing("tok"), &FakeSink::responding(201));
        assert!(pipeline.notice().is_none());
        assert_eq!(pipeline.state(), SubmissionState::Submitted);
    }

    #[test]
    fn blank_required_field_never_enters_submitting() {
        let mut pipeline = LeadPipeline::new();
        pipeline.update_field(FormField::Name, "Aitor".to_string());
        pipeline.update_field(FormField::Comments, "hola".to_string());

        assert!(pipeline.begin_submit().is_none());
        assert_eq!(pipeline.state(), SubmissionState::Idle);
    }

    #[test]
    fn whitespace_only_name_is_sent_as_typed() {
        let mut pipeline = filled();
        pipeline.update_field(FormField::Name, "  ".to_string());

        let ticket = pipeline.begin_submit().expect("browser-valid form should submit");
        assert_eq!(ticket.form.name, "  ");
        assert!(pipeline.is_submitting());
        assert_eq!(pipeline.notice(), None);
    }

    #[test]
    fn submitted_form_ignores_edits_until_reset() {
        let mut pipeline = filled();
        run(&mut pipeline, &FakeChallenge::issuing("tok"), &FakeSink::responding(200));

        assert!(!pipeline.update_field(FormField::Name, "Otro".to_string()));
        assert_eq!(pipeline.form().name, "Aitor");
        assert!(pipeline.begin_submit().is_none());

        pipeline.reset();
        assert_eq!(pipeline.state(), SubmissionState::Idle);
        assert_eq!(pipeline.form(), &LeadForm::default());
        assert_eq!(pipeline.thank_you_name(), None);
    }

    #[test]
    fn result_arriving_after_reset_is_dropped() {
        let mut pipeline = filled();
        let ticket = pipeline.begin_submit().unwrap();

        pipeline.reset();
        assert!(!pipeline.finish(ticket.attempt, Ok(())));
        assert_eq!(pipeline.state(), SubmissionState::Idle);
        assert_eq!(pipeline.thank_you_name(), None);
    }
}
