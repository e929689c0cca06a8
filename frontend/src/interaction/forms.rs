use std::future::Future;

use futures::future::{AbortHandle, Abortable, LocalBoxFuture};
use log::{info, warn};
use serde::Serialize;

use crate::error::{SiteError, ValidationError};

use super::severity::Severity;
use super::validation::is_email_valid;

pub const SENDING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// Name, email and message, all required.
    Contact,
    /// Email only.
    Newsletter,
}

impl FormKind {
    pub fn success_message(&self) -> &'static str {
        match self {
            FormKind::Contact => "Message sent successfully!",
            FormKind::Newsletter => "Thanks for subscribing!",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormKind::Contact => "Send message",
            FormKind::Newsletter => "Subscribe",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn clear(&mut self) {
        *self = FormFields::default();
    }
}

/// Validated payload handed to a `Submitter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub fn validate(kind: FormKind, fields: &FormFields) -> Result<Submission, ValidationError> {
    let name = fields.name.trim();
    let email = fields.email.trim();
    let message = fields.message.trim();

    let missing = match kind {
        FormKind::Contact => [("name", name), ("email", email), ("message", message)]
            .into_iter()
            .find(|(_, value)| value.is_empty()),
        FormKind::Newsletter => [("email", email)].into_iter().find(|(_, value)| value.is_empty()),
    };
    if let Some((field, _)) = missing {
        return Err(ValidationError::MissingField(field));
    }
    if !is_email_valid(email) {
        return Err(ValidationError::MalformedEmail);
    }

    let optional = |value: &str| (!value.is_empty()).then(|| value.to_string());
    Ok(Submission {
        name: optional(name),
        email: email.to_string(),
        message: optional(message),
    })
}

pub trait Submitter {
    fn submit(&self, submission: Submission) -> LocalBoxFuture<'static, Result<(), SiteError>>;
}

/// Validates, submits and reports the outcome through `notify`. On success
/// the fields are cleared; on any failure they are left as entered.
/// Exactly one notification is emitted either way.
pub async fn submit_form<S, F>(
    kind: FormKind,
    fields: &mut FormFields,
    submitter: &S,
    mut notify: F,
) -> Result<(), SiteError>
where
    S: Submitter + ?Sized,
    F: FnMut(&str, Severity),
{
    let result = match validate(kind, fields) {
        Ok(submission) => submitter.submit(submission).await,
        Err(e) => Err(SiteError::from(e)),
    };

    match &result {
        Ok(()) => {
            info!("{:?} form submitted", kind);
            notify(kind.success_message(), Severity::Success);
            fields.clear();
        }
        Err(e) => {
            warn!("{:?} form rejected: {}", kind, e);
            notify(e.user_message(), Severity::Error);
        }
    }
    result
}

/// Wraps a submission so its owner can drop it mid-flight. Once aborted,
/// nothing after the pending await runs: no notification, no field reset.
pub fn cancellable<F: Future>(submission: F) -> (AbortHandle, Abortable<F>) {
    let (handle, registration) = AbortHandle::new_pair();
    (handle, Abortable::new(submission, registration))
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use assert_matches::assert_matches;
    use futures::executor::block_on;
    use futures::FutureExt;

    use super::*;
    use crate::interaction::clock::testing::ManualClock;
    use crate::interaction::notifications::NotificationCenter;
    use crate::interaction::surface::testing::FakeSurface;

    struct FakeSubmitter {
        fail: bool,
        hang: bool,
        calls: Cell<usize>,
        last: RefCell<Option<Submission>>,
    }

    impl FakeSubmitter {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                hang: false,
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }

        fn hanging() -> Self {
            Self {
                hang: true,
                ..Self::new(false)
            }
        }
    }

    impl Submitter for FakeSubmitter {
        fn submit(&self, submission: Submission) -> LocalBoxFuture<'static, Result<(), SiteError>> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(submission);
            if self.hang {
                return futures::future::pending().boxed_local();
            }
            let result = if self.fail {
                Err(SiteError::Submission("connection reset".to_string()))
            } else {
                Ok(())
            };
            futures::future::ready(result).boxed_local()
        }
    }

    fn filled() -> FormFields {
        FormFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn contact_requires_every_field() {
        let mut fields = filled();
        fields.message = "   ".to_string();
        assert_matches!(
            validate(FormKind::Contact, &fields),
            Err(ValidationError::MissingField("message"))
        );
    }

    #[test]
    fn missing_field_is_reported_before_bad_email() {
        let fields = FormFields {
            name: String::new(),
            email: "nope".to_string(),
            message: "hi".to_string(),
        };
        assert_matches!(
            validate(FormKind::Contact, &fields),
            Err(ValidationError::MissingField("name"))
        );
    }

    #[test]
    fn newsletter_needs_only_email() {
        let fields = FormFields {
            email: " pet@smartcare.io ".to_string(),
            ..FormFields::default()
        };
        let submission = validate(FormKind::Newsletter, &fields).unwrap();
        assert_eq!(submission.email, "pet@smartcare.io");
        assert_eq!(submission.name, None);
        assert_eq!(submission.message, None);
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut fields = filled();
        fields.email = "ada@@example.com".to_string();
        assert_matches!(validate(FormKind::Contact, &fields), Err(ValidationError::MalformedEmail));
    }

    #[test]
    fn submission_serializes_without_empty_optionals() {
        let submission = Submission {
            name: None,
            email: "a@b.co".to_string(),
            message: None,
        };
        assert_eq!(serde_json::to_string(&submission).unwrap(), r#"{"email":"a@b.co"}"#);
    }

    #[test]
    fn valid_form_yields_one_success_and_clears_fields() {
        let surface = FakeSurface::default();
        let mut center = NotificationCenter::new(surface.clone(), ManualClock::new(0));
        let submitter = FakeSubmitter::new(false);
        let mut fields = filled();

        let result = block_on(submit_form(FormKind::Contact, &mut fields, &submitter, |m, s| {
            center.notify(m, s);
        }));

        assert!(result.is_ok());
        assert_eq!(submitter.calls.get(), 1);
        assert_eq!(submitter.last.borrow().as_ref().map(|s| s.email.as_str()), Some("ada@example.com"));
        assert_eq!(fields, FormFields::default());
        let toasts = surface.attached_toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].class_name, "notification notification-success");
        assert_eq!(toasts[0].text, "Message sent successfully!");
    }

    #[test]
    fn empty_required_field_yields_one_error_and_keeps_values() {
        let surface = FakeSurface::default();
        let mut center = NotificationCenter::new(surface.clone(), ManualClock::new(0));
        let submitter = FakeSubmitter::new(false);
        let mut fields = filled();
        fields.name.clear();
        let before = fields.clone();

        let result = block_on(submit_form(FormKind::Contact, &mut fields, &submitter, |m, s| {
            center.notify(m, s);
        }));

        assert_matches!(result, Err(SiteError::Validation(ValidationError::MissingField("name"))));
        assert_eq!(submitter.calls.get(), 0);
        assert_eq!(fields, before);
        let toasts = surface.attached_toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].class_name, "notification notification-error");
        assert_eq!(toasts[0].text, "Please fill in all fields");
    }

    #[test]
    fn failed_submission_reports_error_and_keeps_values() {
        let submitter = FakeSubmitter::new(true);
        let mut fields = filled();
        let mut seen = Vec::new();

        let result = block_on(submit_form(FormKind::Contact, &mut fields, &submitter, |m, s| {
            seen.push((m.to_string(), s));
        }));

        assert_matches!(result, Err(SiteError::Submission(_)));
        assert_eq!(fields, filled());
        assert_eq!(seen, vec![("Something went wrong while sending".to_string(), Severity::Error)]);
    }

    #[test]
    fn aborted_submission_reports_nothing_and_keeps_values() {
        let submitter = FakeSubmitter::hanging();
        let mut fields = filled();
        let mut seen = Vec::new();

        let outcome = {
            let (handle, submission) = cancellable(submit_form(FormKind::Contact, &mut fields, &submitter, |m, s| {
                seen.push((m.to_string(), s));
            }));
            let mut submission = Box::pin(submission);
            assert!(submission.as_mut().now_or_never().is_none());
            handle.abort();
            block_on(submission)
        };

        assert!(outcome.is_err());
        assert_eq!(submitter.calls.get(), 1);
        assert!(seen.is_empty());
        assert_eq!(fields, filled());
    }

    #[test]
    fn cancellable_submission_completes_when_left_alone() {
        let submitter = FakeSubmitter::new(false);
        let mut fields = filled();
        let mut seen = Vec::new();

        let (_handle, submission) = cancellable(submit_form(FormKind::Newsletter, &mut fields, &submitter, |m, s| {
            seen.push((m.to_string(), s));
        }));

        assert_matches!(block_on(submission), Ok(Ok(())));
        assert_eq!(seen, vec![("Thanks for subscribing!".to_string(), Severity::Success)]);
    }
}
