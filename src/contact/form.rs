//! Form field record and submission status flag.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::error::FieldError;

/// The three values collected by the contact form.
///
/// This is also the JSON body posted to the contact endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct FormData {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1), email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }

    fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }
}

impl FormData {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    /// Required-field check run before a submission starts.
    ///
    /// Reports the first offending field in display order, so the caller can
    /// move focus there.
    pub fn check_required(&self) -> Result<(), FieldError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };
        let field_errors = errors.field_errors();
        for field in FormField::ALL {
            if let Some(errs) = field_errors.get(field.key()) {
                let missing = errs.iter().any(|e| e.code == "length");
                return Err(if missing {
                    FieldError::Missing(field)
                } else {
                    FieldError::Invalid(field)
                });
            }
        }
        Ok(())
    }
}

/// Submission status flag. Drives which notice, if any, the page shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    None,
    Loading,
    Success,
    Error,
}

impl FormStatus {
    pub fn is_loading(self) -> bool {
        self == FormStatus::Loading
    }
}

#[cfg(test)]
impl FormData {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_mut_touches_one_field() {
        let mut data = FormData::new("Jane", "jane@x.com", "Hi");
        data.field_mut(FormField::Email).push_str(".au");
        assert_eq!(data.field(FormField::Name), "Jane");
        assert_eq!(data.field(FormField::Email), "jane@x.com.au");
        assert_eq!(data.field(FormField::Message), "Hi");
    }

    #[test]
    fn test_check_required() {
        assert!(FormData::new("Jane", "jane@x.com", "Hi").check_required().is_ok());
        assert_eq!(
            FormData::new("", "", "").check_required(),
            Err(FieldError::Missing(FormField::Name))
        );
        assert_eq!(
            FormData::new("Jane", "", "Hi").check_required(),
            Err(FieldError::Missing(FormField::Email))
        );
        assert_eq!(
            FormData::new("Jane", "not-an-email", "Hi").check_required(),
            Err(FieldError::Invalid(FormField::Email))
        );
        assert_eq!(
            FormData::new("Jane", "jane@x.com", "").check_required(),
            Err(FieldError::Missing(FormField::Message))
        );
    }

    #[test]
    fn test_json_body_shape() {
        let body = serde_json::to_value(FormData::new("Jane", "jane@x.com", "Hi")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "Jane", "email": "jane@x.com", "message": "Hi"})
        );
    }
}
