use std::{collections::BTreeMap, fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

// contact form validation
//
// these are pure functions shared by the webapp (before sending) and the server (on receipt), so
// both sides always agree on what a valid submission looks like
pub const EMAIL_REGEX: &str = r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_REGEX).expect("EMAIL_REGEX is a valid pattern"));

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    // only failing fields are present
    pub errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

pub fn required(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

pub fn valid_email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

// lengths are counted in characters, not bytes, so that non-ascii names are not penalized
pub fn length_in_range(value: &str, min: usize, max: usize) -> bool {
    let len = value.trim().chars().count();
    len >= min && len <= max
}

// one rule set per field: the label used in messages and the accepted length, if any
struct Rule {
    field: Field,
    label: &'static str,
    bounds: Option<(usize, usize)>,
}

const RULES: [Rule; 4] = [
    Rule {
        field: Field::Name,
        label: "Name",
        bounds: Some((2, 100)),
    },
    Rule {
        field: Field::Email,
        label: "Email",
        bounds: None,
    },
    Rule {
        field: Field::Subject,
        label: "Subject",
        bounds: Some((3, 200)),
    },
    Rule {
        field: Field::Message,
        label: "Message",
        bounds: Some((10, 2000)),
    },
];

pub fn validate_form(form: &ContactForm) -> ValidationResult {
    let mut errors = BTreeMap::new();

    for rule in RULES.iter() {
        let value = match rule.field {
            Field::Name => form.name.as_str(),
            Field::Email => form.email.as_str(),
            Field::Subject => form.subject.as_str(),
            Field::Message => form.message.as_str(),
        };

        if !required(Some(value)) {
            errors.insert(rule.field, format!("{} is required", rule.label));
            continue;
        }

        match rule.bounds {
            Some((min, max)) => {
                if !length_in_range(value, min, max) {
                    errors.insert(
                        rule.field,
                        format!("{} must be between {min} and {max} characters", rule.label),
                    );
                }
            }
            None => {
                if !valid_email(value) {
                    errors.insert(rule.field, String::from("Please enter a valid email address"));
                }
            }
        }
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_owned(),
            email: email.to_owned(),
            subject: subject.to_owned(),
            message: message.to_owned(),
        }
    }

    #[test]
    fn required_rejects_missing_and_blank() {
        assert!(!required(None));
        assert!(!required(Some("")));
        assert!(!required(Some("   \t\n")));
        assert!(required(Some(" x ")));
    }

    #[test]
    fn email_examples() {
        assert!(valid_email("user.name@domain.co.uk"));
        assert!(valid_email("john@example.com"));
        assert!(valid_email("  padded@example.org  "));
        assert!(!valid_email("invalid@"));
        assert!(!valid_email("@example.com"));
        assert!(!valid_email(""));
        assert!(!valid_email("no-at-sign.com"));
        assert!(!valid_email("user@domain.c"));
        assert!(!valid_email("user@domain.c0m"));
        assert!(!valid_email("us er@domain.com"));
    }

    #[test]
    fn length_bounds_are_inclusive_and_trimmed() {
        assert!(length_in_range("ab", 2, 100));
        assert!(!length_in_range(" a ", 2, 100));
        assert!(length_in_range(&"x".repeat(100), 2, 100));
        assert!(!length_in_range(&"x".repeat(101), 2, 100));
        assert!(length_in_range("", 0, 5));
    }

    #[test]
    fn length_counts_characters() {
        // four characters, eight bytes
        assert!(length_in_range("ÅÄÖÜ", 4, 4));
    }

    #[test]
    fn only_missing_name_is_reported() {
        let result = validate_form(&form("", "a@b.com", "Test", "1234567890"));

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.error(Field::Name), Some("Name is required"));
    }

    #[test]
    fn complete_form_passes() {
        let result = validate_form(&form(
            "John Doe",
            "john@example.com",
            "Test Subject",
            "This is a test message with enough characters.",
        ));

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn every_rule_reports_its_own_message() {
        let result = validate_form(&form("J", "john@", "Hi", "short"));

        assert!(!result.is_valid);
        assert_eq!(
            result.error(Field::Name),
            Some("Name must be between 2 and 100 characters")
        );
        assert_eq!(
            result.error(Field::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            result.error(Field::Subject),
            Some("Subject must be between 3 and 200 characters")
        );
        assert_eq!(
            result.error(Field::Message),
            Some("Message must be between 10 and 2000 characters")
        );
    }

    #[test]
    fn empty_form_reports_required_for_all() {
        let result = validate_form(&ContactForm::default());

        assert_eq!(result.error(Field::Email), Some("Email is required"));
        assert_eq!(result.error(Field::Subject), Some("Subject is required"));
        assert_eq!(result.error(Field::Message), Some("Message is required"));
        assert_eq!(result.errors.len(), 4);
    }

    #[test]
    fn errors_serialize_with_lowercase_field_names() {
        let result = validate_form(&form("", "a@b.com", "Test", "1234567890"));
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["is_valid"], false);
        assert_eq!(json["errors"]["name"], "Name is required");
    }
}
