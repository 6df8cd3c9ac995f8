use std::collections::BTreeMap;

use dioxus::prelude::*;
use tracing::{error, info};

use api::{
    SendContactReq, rejection_from_error, send_contact,
    validate::{ContactForm, Field, validate_form},
};

use crate::common::analytics::track;

const FORM_NAME: &str = "contact";

#[derive(Clone, Debug, PartialEq)]
enum SubmitStatus {
    Sending,
    Sent,
    Failed(String),
}

fn field_value(form: &ContactForm, field: Field) -> &str {
    match field {
        Field::Name => &form.name,
        Field::Email => &form.email,
        Field::Subject => &form.subject,
        Field::Message => &form.message,
    }
}

fn set_field(form: &mut ContactForm, field: Field, value: String) {
    match field {
        Field::Name => form.name = value,
        Field::Email => form.email = value,
        Field::Subject => form.subject = value,
        Field::Message => form.message = value,
    }
}

#[derive(Clone, PartialEq, Props)]
struct FormFieldProps {
    field: Field,
    #[props(into)]
    label: String,
    #[props(default)]
    multiline: bool,
    form: Signal<ContactForm>,
    errors: Signal<BTreeMap<Field, String>>,
}

// one labelled input with its error line
//
// errors are shown once a field loses focus and cleared as soon as it becomes valid
#[component]
fn FormField(props: FormFieldProps) -> Element {
    let field = props.field;
    let mut form = props.form;
    let mut errors = props.errors;

    let id = format!("contact-{field}");
    let error_id = format!("{id}-error");
    let value = field_value(&form.read(), field).to_owned();
    let error = errors.read().get(&field).cloned();

    let invalid = error.is_some();
    let input_type = if field == Field::Email { "email" } else { "text" };
    let class = if invalid {
        "form-group invalid"
    } else {
        "form-group"
    };

    let mut check = move || {
        let result = validate_form(&form.read());
        errors.with_mut(|e| match result.errors.get(&field) {
            Some(msg) => {
                e.insert(field, msg.clone());
            }
            None => {
                e.remove(&field);
            }
        });
    };

    let oninput = move |evt: FormEvent| {
        form.with_mut(|f| set_field(f, field, evt.value()));
        if errors.peek().contains_key(&field) {
            check();
        }
    };

    rsx! {
        div { class,
            label { r#for: "{id}", "{props.label}" }
            if props.multiline {
                textarea {
                    id: "{id}",
                    name: "{field}",
                    rows: "6",
                    value,
                    aria_invalid: "{invalid}",
                    aria_describedby: "{error_id}",
                    oninput: oninput,
                    onblur: move |_| check(),
                }
            } else {
                input {
                    id: "{id}",
                    name: "{field}",
                    r#type: input_type,
                    value,
                    aria_invalid: "{invalid}",
                    aria_describedby: "{error_id}",
                    oninput: oninput,
                    onblur: move |_| check(),
                }
            }
            span { id: "{error_id}", class: "field-error", role: "alert",
                if let Some(msg) = &error {
                    "{msg}"
                }
            }
        }
    }
}

#[component]
pub fn ContactFormBox() -> Element {
    let mut form = use_signal(ContactForm::default);
    let mut errors = use_signal(BTreeMap::<Field, String>::new);
    let mut status = use_signal(|| None::<SubmitStatus>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let current = form();
        let result = validate_form(&current);

        if !result.is_valid {
            errors.set(result.errors);
            track(|a| a.track_form_submission(FORM_NAME, false));
            return;
        }

        errors.set(BTreeMap::new());
        status.set(Some(SubmitStatus::Sending));

        spawn(async move {
            match send_contact(&SendContactReq { form: current }).await {
                Ok(_) => {
                    info!("contact message sent");
                    form.set(ContactForm::default());
                    status.set(Some(SubmitStatus::Sent));
                    track(|a| a.track_form_submission(FORM_NAME, true));
                }
                Err(err) => {
                    // the server validates again; its field errors replace ours
                    match rejection_from_error(&err) {
                        Some(rejection) => {
                            errors.set(rejection.errors);
                            status.set(None);
                        }
                        None => {
                            error!("failed to send contact message: {err}");
                            status.set(Some(SubmitStatus::Failed(
                                "Sorry, your message could not be sent. Please try again later."
                                    .to_owned(),
                            )));
                        }
                    }
                    track(|a| a.track_form_submission(FORM_NAME, false));
                }
            }
        });
    };

    let sending = status() == Some(SubmitStatus::Sending);

    rsx! {
        form { class: "card contact-form", novalidate: true, onsubmit: onsubmit,
            FormField { field: Field::Name, label: "Name", form, errors }
            FormField { field: Field::Email, label: "Email", form, errors }
            FormField { field: Field::Subject, label: "Subject", form, errors }
            FormField {
                field: Field::Message,
                label: "Message",
                multiline: true,
                form,
                errors,
            }

            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: sending,
                if sending {
                    "Sending..."
                } else {
                    "Send Message"
                }
            }

            match status() {
                Some(SubmitStatus::Sent) => rsx! {
                    p { class: "form-status success", role: "status",
                        "Thanks! Your message has been sent."
                    }
                },
                Some(SubmitStatus::Failed(msg)) => rsx! {
                    p { class: "form-status error", role: "alert", "{msg}" }
                },
                _ => rsx! {},
            }
        }
    }
}
