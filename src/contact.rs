use std::{fmt, sync::LazyLock, time::Duration};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long the simulated delivery holds the form in `Submitting`.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1500);

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Element id and form control name.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("email address is malformed")]
    MalformedEmail,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("message rejected: {0}")]
    Rejected(String),
    #[error("delivery timed out")]
    TimedOut,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("a message is already in flight")]
    Busy,
}

/// Raw field values as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validated submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn validate(&self) -> Result<ContactMessage, ValidationError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(ValidationError::MissingField(field));
        }
        let email = self.email.trim();
        if !EMAIL_SHAPE.is_match(email) {
            return Err(ValidationError::MalformedEmail);
        }
        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed(SubmitError),
}

/// The contact form's lifecycle: idle → submitting → success, reset back to idle.
/// `Failed` is only reachable through a transport that can reject; it keeps the fields
/// so the visitor can retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFlow {
    pub form: ContactForm,
    pub phase: Phase,
}

impl ContactFlow {
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Validate and move to `Submitting`, handing back the message to deliver.
    /// Invalid input leaves the phase untouched.
    pub fn submit(&mut self) -> Result<ContactMessage, ContactError> {
        match self.phase {
            Phase::Idle | Phase::Failed(_) => {}
            Phase::Submitting | Phase::Success => return Err(ContactError::Busy),
        }
        let message = self.form.validate()?;
        log::debug!("contact form submitting");
        self.phase = Phase::Submitting;
        Ok(message)
    }

    /// Record the delivery outcome. Ignored unless a submission is in flight.
    pub fn finish(&mut self, outcome: Result<(), SubmitError>) {
        if !self.is_submitting() {
            return;
        }
        self.phase = match outcome {
            Ok(()) => Phase::Success,
            Err(e) => {
                log::debug!("contact form failed: {e}");
                Phase::Failed(e)
            }
        };
    }

    /// "Send another message": back to a blank idle form.
    pub fn reset(&mut self) {
        if self.is_submitting() {
            return;
        }
        *self = Self::default();
    }
}

/// Where a validated message goes once the form is submitted.
pub trait Transport {
    /// Time between submission and `deliver` being called. Zero delivers in the same turn.
    fn latency(&self) -> Duration;

    fn deliver(&self, message: &ContactMessage) -> Result<(), SubmitError>;
}

/// Stand-in delivery: waits `SIMULATED_LATENCY` and always succeeds. Nothing leaves the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedTransport;

impl Transport for SimulatedTransport {
    fn latency(&self) -> Duration {
        SIMULATED_LATENCY
    }

    fn deliver(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        log::debug!(
            "simulated delivery: {}",
            serde_json::to_string(message).unwrap_or_default()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rejecting;

    impl Transport for Rejecting {
        fn latency(&self) -> Duration {
            Duration::ZERO
        }

        fn deliver(&self, _message: &ContactMessage) -> Result<(), SubmitError> {
            Err(SubmitError::Rejected("spam".to_string()))
        }
    }

    fn filled() -> ContactForm {
        ContactForm {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            subject: "Project collaboration".to_string(),
            message: "Tell me about your project".to_string(),
        }
    }

    fn drive<T: Transport>(flow: &mut ContactFlow, transport: &T) -> Result<Duration, ContactError> {
        let message = flow.submit()?;
        assert_eq!(flow.phase, Phase::Submitting);
        flow.finish(transport.deliver(&message));
        Ok(transport.latency())
    }

    #[test]
    fn test_submit_success() {
        let mut flow = ContactFlow {
            form: filled(),
            ..Default::default()
        };
        assert_eq!(flow.phase, Phase::Idle);
        let waited = drive(&mut flow, &SimulatedTransport).expect("valid form should submit");
        assert!(waited >= Duration::from_millis(1500));
        assert_eq!(flow.phase, Phase::Success);
    }

    #[test]
    fn test_missing_field_never_succeeds() {
        for field in Field::ALL {
            let mut form = filled();
            form.set(field, "   ".to_string());
            let mut flow = ContactFlow {
                form,
                ..Default::default()
            };
            let err = drive(&mut flow, &SimulatedTransport).unwrap_err();
            assert_eq!(err, ContactError::Invalid(ValidationError::MissingField(field)));
            assert_eq!(flow.phase, Phase::Idle);
        }
    }

    #[test]
    fn test_malformed_email() {
        let mut form = filled();
        form.email = "john.example.com".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MalformedEmail));
        form.email = "john@example".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MalformedEmail));
        form.email = "  john@example.com ".to_string();
        assert_eq!(form.validate().map(|m| m.email), Ok("john@example.com".to_string()));
    }

    #[test]
    fn test_busy_while_in_flight() {
        let mut flow = ContactFlow {
            form: filled(),
            ..Default::default()
        };
        flow.submit().expect("first submit");
        assert_eq!(flow.submit(), Err(ContactError::Busy));
        // reset is ignored mid-flight
        flow.reset();
        assert!(flow.is_submitting());
        flow.finish(Ok(()));
        assert_eq!(flow.submit(), Err(ContactError::Busy));
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut flow = ContactFlow {
            form: filled(),
            ..Default::default()
        };
        drive(&mut flow, &SimulatedTransport).expect("submit");
        assert_eq!(flow.phase, Phase::Success);
        flow.reset();
        assert_eq!(flow.phase, Phase::Idle);
        assert!(flow.form.is_empty());
    }

    #[test]
    fn test_failed_keeps_fields_and_retries() {
        let mut flow = ContactFlow {
            form: filled(),
            ..Default::default()
        };
        drive(&mut flow, &Rejecting).expect("submit");
        assert_eq!(
            flow.phase,
            Phase::Failed(SubmitError::Rejected("spam".to_string()))
        );
        assert_eq!(flow.form, filled());

        drive(&mut flow, &SimulatedTransport).expect("retry");
        assert_eq!(flow.phase, Phase::Success);
    }

    #[test]
    fn test_finish_without_submit_is_ignored() {
        let mut flow = ContactFlow::default();
        flow.finish(Ok(()));
        assert_eq!(flow.phase, Phase::Idle);
    }
}
