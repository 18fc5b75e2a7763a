use std::sync::LazyLock;

use dioxus::prelude::*;
use regex::Regex;

use crate::dom::sleep_ms;
use crate::reveal::Reveal;
use crate::routes::SectionTitle;

/// Stand-in for network latency; nothing is actually sent.
pub const SUBMIT_DELAY_MS: u32 = 2000;
pub const SUCCESS_VISIBLE_MS: u32 = 5000;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email regex should compile")
});

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn error_message(self) -> &'static str {
        match self {
            Field::Name => "Name must be at least 2 characters long",
            Field::Email => "Please enter a valid email address",
            Field::Subject => "Subject must be at least 3 characters long",
            Field::Message => "Message must be at least 10 characters long",
        }
    }
}

/// One entry per invalid field, in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    fields: Vec<Field>,
}

impl FieldErrors {
    fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.contains(field).then(|| field.error_message())
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

/// Browser inputs treat a byte-order mark as whitespace too.
fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn char_len(value: &str) -> usize {
    trim_input(value).chars().count()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(trim_input(value))
}

/// Checks every field and reports all violations together.
pub fn validate(form: &ContactForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if char_len(&form.name) < 2 {
        errors.push(Field::Name);
    }
    if !is_valid_email(&form.email) {
        errors.push(Field::Email);
    }
    if char_len(&form.subject) < 3 {
        errors.push(Field::Subject);
    }
    if char_len(&form.message) < 10 {
        errors.push(Field::Message);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
}

impl SubmitPhase {
    pub fn submit_label(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "Send Message",
            SubmitPhase::Sending => "Sending...",
        }
    }

    pub fn button_class(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "btn btn--primary btn--full-width",
            SubmitPhase::Sending => "btn btn--primary btn--full-width loading",
        }
    }

    pub fn is_busy(self) -> bool {
        self == SubmitPhase::Sending
    }
}

fn control_class(errors: &FieldErrors, field: Field) -> &'static str {
    if errors.contains(field) {
        "form-control form-error"
    } else {
        "form-control"
    }
}

#[component]
pub fn ContactSection() -> Element {
    let mut form = use_signal(ContactForm::default);
    let mut errors = use_signal(FieldErrors::default);
    let mut phase = use_signal(SubmitPhase::default);
    let success = use_signal(|| None::<u64>);
    let mut submissions = use_signal(|| 0u64);

    let current_errors = errors.read().clone();
    let current_phase = phase();

    rsx! {
        section { id: "contact", class: "contact section",
            div { class: "container",
                SectionTitle { title: "Get In Touch" }
                Reveal { class: "contact-content",
                    div { class: "contact-info",
                        p { "Have a project in mind or just want to say hello? Drop me a message." }
                    }
                    form {
                        id: "contact-form",
                        class: "contact-form",
                        "novalidate": "true",
                        onsubmit: move |event| {
                            event.prevent_default();
                            if phase().is_busy() {
                                return;
                            }
                            if let Err(found) = validate(&form()) {
                                tracing::debug!("contact: {} invalid fields", found.len());
                                errors.set(found);
                                return;
                            }
                            errors.set(FieldErrors::default());
                            phase.set(SubmitPhase::Sending);
                            let ticket = submissions() + 1;
                            submissions.set(ticket);
                            let mut success = success;
                            let mut form = form;
                            let mut errors = errors;
                            let mut phase = phase;
                            spawn(async move {
                                tracing::debug!("contact: simulating submission {ticket}");
                                sleep_ms(SUBMIT_DELAY_MS).await;
                                success.set(Some(ticket));
                                form.set(ContactForm::default());
                                errors.set(FieldErrors::default());
                                phase.set(SubmitPhase::Idle);
                                sleep_ms(SUCCESS_VISIBLE_MS).await;
                                if success() == Some(ticket) {
                                    success.set(None);
                                }
                            });
                        },
                        div { class: "form-group",
                            label { r#for: Field::Name.id(), class: "form-label", "Name" }
                            input {
                                id: Field::Name.id(),
                                name: Field::Name.id(),
                                r#type: "text",
                                class: control_class(&current_errors, Field::Name),
                                value: "{form().name}",
                                oninput: move |event| {
                                    let mut next = form();
                                    next.name = event.value();
                                    form.set(next);
                                },
                            }
                            if let Some(message) = current_errors.get(Field::Name) {
                                div { class: "field-error", "{message}" }
                            }
                        }
                        div { class: "form-group",
                            label { r#for: Field::Email.id(), class: "form-label", "Email" }
                            input {
                                id: Field::Email.id(),
                                name: Field::Email.id(),
                                r#type: "email",
                                class: control_class(&current_errors, Field::Email),
                                value: "{form().email}",
                                oninput: move |event| {
                                    let mut next = form();
                                    next.email = event.value();
                                    form.set(next);
                                },
                            }
                            if let Some(message) = current_errors.get(Field::Email) {
                                div { class: "field-error", "{message}" }
                            }
                        }
                        div { class: "form-group",
                            label { r#for: Field::Subject.id(), class: "form-label", "Subject" }
                            input {
                                id: Field::Subject.id(),
                                name: Field::Subject.id(),
                                r#type: "text",
                                class: control_class(&current_errors, Field::Subject),
                                value: "{form().subject}",
                                oninput: move |event| {
                                    let mut next = form();
                                    next.subject = event.value();
                                    form.set(next);
                                },
                            }
                            if let Some(message) = current_errors.get(Field::Subject) {
                                div { class: "field-error", "{message}" }
                            }
                        }
                        div { class: "form-group",
                            label { r#for: Field::Message.id(), class: "form-label", "Message" }
                            textarea {
                                id: Field::Message.id(),
                                name: Field::Message.id(),
                                rows: "5",
                                class: control_class(&current_errors, Field::Message),
                                value: "{form().message}",
                                oninput: move |event| {
                                    let mut next = form();
                                    next.message = event.value();
                                    form.set(next);
                                },
                            }
                            if let Some(message) = current_errors.get(Field::Message) {
                                div { class: "field-error", "{message}" }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: current_phase.button_class(),
                            disabled: current_phase.is_busy(),
                            "{current_phase.submit_label()}"
                        }
                        if success().is_some() {
                            div { class: "form-success-message", role: "status",
                                "✅ Thank you! Your message has been sent successfully."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn accepts_a_complete_form() {
        assert_eq!(
            validate(&form("Ada", "ada@example.com", "Hello", "Long enough message")),
            Ok(())
        );
    }

    #[test]
    fn short_message_is_the_only_error() {
        let errors = validate(&form("Al", "a@b.c", "Hi!", "short")).unwrap_err();
        assert_eq!(errors.fields(), &[Field::Message]);
        assert_eq!(
            errors.get(Field::Message),
            Some("Message must be at least 10 characters long")
        );
    }

    #[test]
    fn reports_every_field_at_once() {
        let errors = validate(&form("A", "not-an-email", "Hi", "")).unwrap_err();
        assert_eq!(
            errors.fields(),
            &[Field::Name, Field::Email, Field::Subject, Field::Message]
        );
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn lengths_are_measured_after_trimming() {
        let errors = validate(&form("  A  ", " a@b.c ", "  Hey ", "   0123456789   ")).unwrap_err();
        assert_eq!(errors.fields(), &[Field::Name]);
    }

    #[test]
    fn lengths_count_chars_not_bytes() {
        assert_eq!(validate(&form("Zé", "z@e.pt", "Olá", "ça va très bien")), Ok(()));
        let errors = validate(&form("é", "z@e.pt", "Olá", "ça va très bien")).unwrap_err();
        assert_eq!(errors.fields(), &[Field::Name]);
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert!(!is_valid_email("a\u{feff}@b.c"));
        assert!(is_valid_email("\u{feff}a@b.c\u{feff}"));
        let errors = validate(&form("\u{feff}A\u{feff}", "a@b.c", "Hey", "0123456789")).unwrap_err();
        assert_eq!(errors.fields(), &[Field::Name]);
    }

    #[test]
    fn validation_has_no_memory() {
        let bad = form("A", "x", "y", "z");
        let good = form("Ada", "ada@example.com", "Hello", "Long enough message");
        let first = validate(&bad);
        assert_eq!(validate(&good), Ok(()));
        assert_eq!(validate(&bad), first);
    }

    #[test]
    fn submit_phase_labels() {
        assert_eq!(SubmitPhase::Idle.submit_label(), "Send Message");
        assert_eq!(SubmitPhase::Sending.submit_label(), "Sending...");
        assert!(SubmitPhase::Sending.button_class().ends_with("loading"));
        assert!(!SubmitPhase::Idle.is_busy());
    }
}
