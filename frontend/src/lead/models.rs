use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::config;

pub const SUBMIT_ERROR_MESSAGE: &str =
    "Hubo un error al enviar el formulario. Por favor, inténtelo de nuevo.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Comments,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Comments,
    ];

    /// Value of the `name` attribute on the matching input.
    pub fn input_name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Comments => "comments",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            FormField::Name => "text",
            FormField::Email => "email",
            FormField::Phone => "tel",
            FormField::Comments => "textarea",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Tu Nombre",
            FormField::Email => "Tu Email",
            FormField::Phone => "Tu Teléfono",
            FormField::Comments => "¿Quieres comentarnos algo?",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FormField::Comments)
    }
}

/// Contact details typed by the visitor. One per form instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub comments: String,
}

impl LeadForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Comments => &self.comments,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Comments => self.comments = value,
        }
    }

    /// First required field left blank, if any.
    pub fn missing_required(&self) -> Option<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| field.is_required())
            .find(|field| self.get(*field).is_empty())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Body posted to the lead webhook. Built per attempt and dropped after sending.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    #[serde(flatten)]
    pub form: LeadForm,
    pub recaptcha_token: String,
    pub source: &'static str,
    pub timestamp: String,
}

impl LeadRecord {
    pub fn new(form: LeadForm, recaptcha_token: String, submitted_at: DateTime<Utc>) -> Self {
        Self {
            form,
            recaptcha_token,
            source: config::LEAD_SOURCE,
            timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("challenge token could not be acquired")]
    TokenAcquisition,
    #[error("lead was not accepted: {0}")]
    NetworkOrServer(String),
}

impl SubmitError {
    /// Both failure kinds read the same to the visitor.
    pub fn user_message(&self) -> &'static str {
        SUBMIT_ERROR_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled_form() -> LeadForm {
        LeadForm {
            name: "Miren".to_string(),
            email: "miren@example.com".to_string(),
            phone: "600123456".to_string(),
            comments: String::new(),
        }
    }

    #[test]
    fn last_write_wins_per_field() {
        let mut form = LeadForm::default();
        form.set(FormField::Name, "M".to_string());
        form.set(FormField::Name, "Mi".to_string());
        form.set(FormField::Email, "a@b.c".to_string());
        form.set(FormField::Name, "Miren".to_string());

        assert_eq!(form.get(FormField::Name), "Miren");
        assert_eq!(form.get(FormField::Email), "a@b.c");
        assert_eq!(form.get(FormField::Phone), "");
        assert_eq!(form.get(FormField::Comments), "");
    }

    #[test]
    fn comments_are_optional() {
        let form = filled_form();
        assert_eq!(form.missing_required(), None);

        let mut no_phone = filled_form();
        no_phone.phone = String::new();
        assert_eq!(no_phone.missing_required(), Some(FormField::Phone));

        let mut spaced_phone = filled_form();
        spaced_phone.phone = "   ".to_string();
        assert_eq!(spaced_phone.missing_required(), None);

        assert_eq!(LeadForm::default().missing_required(), Some(FormField::Name));
    }

    #[test]
    fn record_serializes_with_webhook_keys() {
        let at = Utc.with_ymd_and_hms(2025, 2, 21, 9, 15, 0).unwrap();
        let record = LeadRecord::new(filled_form(), "tok-123".to_string(), at);
        let body = serde_json::to_value(&record).unwrap();

        let mut keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["comments", "email", "name", "phone", "recaptchaToken", "source", "timestamp"]
        );
        assert_eq!(body["recaptchaToken"], "tok-123");
        assert_eq!(body["source"], "website_form");
        assert_eq!(body["timestamp"], "2025-02-21T09:15:00.000Z");
        assert_eq!(body["comments"], "");
    }

    #[test]
    fn failure_kinds_share_one_message() {
        assert_eq!(
            SubmitError::TokenAcquisition.user_message(),
            SubmitError::NetworkOrServer("status 500".to_string()).user_message()
        );
    }
}
