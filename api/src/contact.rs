use serde::{Deserialize, Serialize};

use crate::endpoint;
use crate::validate::{ContactForm, ValidationResult};

// messages

// submit the contact form
//
// the server re-runs validate_form and answers 422 with a serialized ValidationResult when the
// submission is rejected, see rejection_from_error()
endpoint!(SendContact);

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendContactReq {
    pub form: ContactForm,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendContactResp {
    pub ok: bool,
}

// try to recover the per-field errors from a failed send_contact() call
pub fn rejection_from_error(err: &anyhow::Error) -> Option<ValidationResult> {
    serde_json::from_str::<ValidationResult>(&err.to_string()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{Field, validate_form};

    #[test]
    fn rejection_body_round_trips_through_error() {
        let result = validate_form(&ContactForm::default());
        let err = anyhow::Error::msg(serde_json::to_string(&result).unwrap());

        let recovered = rejection_from_error(&err).unwrap();
        assert_eq!(recovered.error(Field::Name), Some("Name is required"));
    }

    #[test]
    fn plain_text_errors_are_not_rejections() {
        let err = anyhow::Error::msg("internal server error: disk full");
        assert!(rejection_from_error(&err).is_none());
    }
}
