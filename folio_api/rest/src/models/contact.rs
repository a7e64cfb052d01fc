use std::{collections::BTreeMap, sync::LazyLock};

use folio_models::contact::ContactSubmission;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 ().-]{5,19}$").unwrap());

#[derive(Debug, Clone, Default, Validate)]
pub struct ApiContactSubmission {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(
        length(min = 1, message = "Phone number is required"),
        regex(path = *PHONE_REGEX, message = "Invalid phone number")
    )]
    pub phone: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            full_name: value.full_name,
            phone: value.phone,
            email: value.email,
            message: value.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Checks an arbitrary JSON body against the submission schema.
///
/// Field type mismatches land in the same per-field error map as rule
/// failures, like the frontend schema reports them; only a body that is not
/// JSON at all is someone else's problem. A missing or `null` field is treated
/// as empty and caught by the required rules.
pub fn parse_submission(body: Value) -> Result<ApiContactSubmission, FieldErrors> {
    let mut submission = ApiContactSubmission::default();
    let mut type_errors = FieldErrors::new();

    let fields = [
        ("fullName", "Full name must be text", &mut submission.full_name),
        ("phone", "Phone number must be text", &mut submission.phone),
        ("email", "Email address must be text", &mut submission.email),
        ("message", "Message must be text", &mut submission.message),
    ];
    for (field, type_message, target) in fields {
        match body.get(field) {
            Some(Value::String(value)) => *target = value.clone(),
            None | Some(Value::Null) => {}
            Some(_) => {
                type_errors.insert(field.into(), vec![type_message.into()]);
            }
        }
    }

    match submission.validate() {
        Ok(()) if type_errors.is_empty() => Ok(submission),
        result => {
            let mut errors = result
                .err()
                .as_ref()
                .map(validation_errors)
                .unwrap_or_default();
            // A field that failed on type only gets the type error reported.
            errors.extend(type_errors);
            Err(errors)
        }
    }
}

pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Flattens [`ValidationErrors`] into the response shape the frontend expects:
/// one array of messages per invalid field, keyed by the JSON field name.
fn validation_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|error| match &error.message {
                    Some(message) => message.to_string(),
                    None => error.code.to_string(),
                })
                .collect();
            (camel_case(field.as_ref()), messages)
        })
        .collect()
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn valid_body_passes() {
        let submission = parse_submission(payload()).unwrap();
        assert_eq!(submission.full_name, "Jane Doe");
        assert_eq!(submission.phone, "+1234567890");
        assert_eq!(submission.email, "jane@example.com");
        assert_eq!(submission.message, "Hi");
    }

    #[test]
    fn errors_are_keyed_by_json_field_name() {
        let mut payload = payload();
        payload["fullName"] = json!("");
        payload["email"] = json!("not-an-email");

        let errors = parse_submission(payload).unwrap_err();

        assert_eq!(
            errors.keys().cloned().collect::<Vec<_>>(),
            ["email", "fullName"].map(String::from)
        );
        assert_eq!(errors["fullName"], ["Full name is required"]);
        assert_eq!(errors["email"], ["Invalid email address"]);
    }

    #[test]
    fn phone_must_be_phone_shaped() {
        let mut payload = payload();
        payload["phone"] = json!("call me maybe");

        let errors = parse_submission(payload).unwrap_err();

        assert_eq!(errors["phone"], ["Invalid phone number"]);
    }

    #[test]
    fn empty_field_collects_every_failed_rule() {
        let mut payload = payload();
        payload["phone"] = json!("");

        let errors = parse_submission(payload).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(errors["phone"].contains(&"Phone number is required".to_string()));
    }

    #[test]
    fn mistyped_field_is_a_field_error() {
        let mut payload = payload();
        payload["fullName"] = json!(123);

        let errors = parse_submission(payload).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors["fullName"], ["Full name must be text"]);
    }

    #[test]
    fn missing_fields_are_required() {
        let errors = parse_submission(json!({})).unwrap_err();

        for field in ["fullName", "phone", "email", "message"] {
            assert!(!errors[field].is_empty(), "{field}");
        }
    }

    #[test]
    fn non_object_body_fails_every_field() {
        let errors = parse_submission(json!([1, 2, 3])).unwrap_err();

        assert_eq!(errors.len(), 4);
    }

    fn payload() -> Value {
        json!({
            "fullName": "Jane Doe",
            "phone": "+1234567890",
            "email": "jane@example.com",
            "message": "Hi",
        })
    }
}
