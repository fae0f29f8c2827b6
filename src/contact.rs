use serde::Serialize;

use crate::config::RelayConfig;

pub const SENT_MESSAGE: &str = "Form submitted successfully. Thank you for reaching out!";
pub const FAILED_MESSAGE: &str = "Form submission failed! Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("please fill in your {}", .0.as_str())]
    Missing(ContactField),
    #[error("please enter a valid email address")]
    InvalidEmail,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    #[error("failed to encode relay request: {0}")]
    Encode(String),
    #[error("relay unreachable: {0}")]
    Network(String),
    #[error("relay rejected submission with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Field values, serialized as the relay template parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            if self.get(field).trim().is_empty() {
                return Err(FormError::Missing(field));
            }
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(FormError::InvalidEmail),
        }
    }

    /// Clears the fields after a successful send; a failure leaves them as typed.
    pub fn settle(&mut self, outcome: &Result<(), RelayError>) {
        if outcome.is_ok() {
            *self = Self::default();
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RelayRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactForm,
}

impl<'a> RelayRequest<'a> {
    pub fn new(config: &'a RelayConfig, form: &'a ContactForm) -> Self {
        Self {
            service_id: config.service_id,
            template_id: config.template_id,
            user_id: config.user_id,
            template_params: form,
        }
    }
}

/// Form state held by the contact form component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormModel {
    pub fields: ContactForm,
    pub sending: bool,
}

#[derive(Debug)]
pub enum FormAction {
    Edit(ContactField, String),
    Sending,
    Settle(Result<(), RelayError>),
}

impl FormModel {
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Edit(field, value) => self.fields.set(field, value),
            FormAction::Sending => self.sending = true,
            FormAction::Settle(outcome) => {
                self.fields.settle(&outcome);
                self.sending = false;
            }
        }
    }
}

pub fn outcome_message(outcome: &Result<(), RelayError>) -> &'static str {
    match outcome {
        Ok(()) => SENT_MESSAGE,
        Err(_) => FAILED_MESSAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn failed_submission_keeps_fields() {
        let mut form = filled();
        let outcome = Err(RelayError::Rejected {
            status: 400,
            body: "The user ID is invalid".to_string(),
        });

        form.settle(&outcome);
        assert_eq!(form, filled());
        assert_eq!(outcome_message(&outcome), FAILED_MESSAGE);
    }

    #[test]
    fn successful_submission_clears_fields() {
        let mut form = filled();
        form.settle(&Ok(()));
        assert_eq!(form, ContactForm::default());
        assert_eq!(outcome_message(&Ok(())), SENT_MESSAGE);
    }

    #[test]
    fn rejected_send_keeps_typed_fields_and_reenables_submit() {
        let mut model = FormModel::default();
        model.apply(FormAction::Edit(ContactField::Name, "Ada".to_string()));
        model.apply(FormAction::Edit(ContactField::Email, "ada@example.com".to_string()));
        model.apply(FormAction::Edit(ContactField::Message, "Hello there".to_string()));
        model.apply(FormAction::Sending);
        assert!(model.sending);

        model.apply(FormAction::Settle(Err(RelayError::Network("offline".to_string()))));
        assert!(!model.sending);
        assert_eq!(model.fields, filled());
    }

    #[test]
    fn accepted_send_clears_the_form() {
        let mut model = FormModel {
            fields: filled(),
            sending: false,
        };
        model.apply(FormAction::Sending);
        model.apply(FormAction::Settle(Ok(())));
        assert_eq!(model, FormModel::default());
    }

    #[test]
    fn validation_reports_first_missing_field() {
        let mut form = filled();
        form.set(ContactField::Name, "  ".to_string());
        assert_eq!(form.validate(), Err(FormError::Missing(ContactField::Name)));

        let mut form = filled();
        form.set(ContactField::Message, String::new());
        assert_eq!(form.validate(), Err(FormError::Missing(ContactField::Message)));

        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn email_needs_local_part_and_domain() {
        let mut form = filled();
        for bad in ["ada", "@example.com", "ada@"] {
            form.set(ContactField::Email, bad.to_string());
            assert_eq!(form.validate(), Err(FormError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn relay_request_carries_identifiers_and_fields() {
        let config = RelayConfig {
            endpoint: "https://relay.test/send",
            user_id: "user_1",
            service_id: "service_1",
            template_id: "template_1",
        };
        let form = filled();

        let body = serde_json::to_value(RelayRequest::new(&config, &form)).expect("serializable");
        assert_eq!(body["user_id"], "user_1");
        assert_eq!(body["service_id"], "service_1");
        assert_eq!(body["template_id"], "template_1");
        assert_eq!(body["template_params"]["email"], "ada@example.com");
        assert_eq!(body["template_params"]["phone"], "");
    }

    #[test]
    fn form_error_messages_name_the_field() {
        assert_eq!(
            FormError::Missing(ContactField::Email).to_string(),
            "please fill in your email"
        );
    }
}
