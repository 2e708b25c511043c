//! Contact form handling
//!
//! The full stub sequence for one submit event: block the native
//! submission, capture the fields, log the capture, acknowledge the
//! sender, reset the form. No network call, no validation.

use vela_page::{DocumentSurface, SubmitEvent};

use crate::submission::Submission;

/// Placeholder acknowledgment shown after a capture.
const ACKNOWLEDGMENT: &str = "Thank you for your message! We will get back to you soon.";

#[derive(Debug, Default)]
pub struct ContactFormHandler {
    captured: Vec<Submission>,
}

impl ContactFormHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a submit event end to end.
    // TODO: hand captured submissions to a delivery backend once one exists.
    pub fn handle_submit(
        &mut self,
        event: &mut SubmitEvent,
        document: &mut impl DocumentSurface,
    ) -> Submission {
        event.prevent_default();

        let submission = Submission::capture(event.fields());
        tracing::info!(
            submission_id = %submission.id,
            fields = %serde_json::to_string(&submission.fields).unwrap_or_default(),
            "Contact form captured"
        );

        document.show_notice(ACKNOWLEDGMENT);

        if !document.reset_contact_form() {
            tracing::debug!("No contact form to reset");
        }

        self.captured.push(submission.clone());
        if self.captured.len() > 20 {
            let overflow = self.captured.len() - 20;
            self.captured.drain(0..overflow);
        }

        submission
    }

    /// Submissions captured so far, oldest first.
    pub fn captured(&self) -> &[Submission] {
        &self.captured
    }

    pub fn acknowledgment() -> &'static str {
        ACKNOWLEDGMENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vela_page::PageDocument;

    fn document_with_form() -> PageDocument {
        let mut doc = PageDocument::new("Docs");
        doc.install_contact_form(&["name", "email"]);
        doc.set_form_field("name", "A");
        doc.set_form_field("email", "b@x.com");
        doc
    }

    #[test]
    fn test_submit_captures_and_resets() {
        let mut doc = document_with_form();
        let mut handler = ContactFormHandler::new();

        let mut event = doc.submit_contact_form().unwrap();
        let submission = handler.handle_submit(&mut event, &mut doc);

        assert!(event.default_prevented());
        assert_eq!(submission.field("name"), Some("A"));
        assert_eq!(submission.field("email"), Some("b@x.com"));

        // Acknowledged and reset
        assert_eq!(doc.notices(), [ContactFormHandler::acknowledgment().to_string()]);
        let fields = doc.form_fields().unwrap();
        assert!(fields.iter().all(|(_, value)| value.is_empty()));

        assert_eq!(handler.captured().len(), 1);
        assert_eq!(handler.captured()[0].id, submission.id);
    }

    #[test]
    fn test_repeated_field_names_last_wins() {
        let mut doc = PageDocument::new("Docs");
        doc.install_contact_form(&["email"]);
        doc.set_form_field("email", "first@x.com");
        doc.push_form_field("email", "second@x.com");

        let mut handler = ContactFormHandler::new();
        let mut event = doc.submit_contact_form().unwrap();
        let submission = handler.handle_submit(&mut event, &mut doc);

        assert_eq!(submission.field("email"), Some("second@x.com"));
    }

    #[test]
    fn test_missing_form_still_acknowledges() {
        let mut doc = PageDocument::new("Docs");
        let mut handler = ContactFormHandler::new();

        let mut event = SubmitEvent::new(Vec::new());
        let submission = handler.handle_submit(&mut event, &mut doc);

        assert!(event.default_prevented());
        assert_eq!(submission.field_count(), 0);
        assert_eq!(doc.notices().len(), 1);
    }

    #[test]
    fn test_capture_log_is_bounded() {
        let mut doc = document_with_form();
        let mut handler = ContactFormHandler::new();

        for _ in 0..25 {
            let mut event = doc.submit_contact_form().unwrap();
            handler.handle_submit(&mut event, &mut doc);
        }

        assert_eq!(handler.captured().len(), 20);
    }
}
