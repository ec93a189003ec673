//! Success/error message slot shared by the dashboard tabs.
//!
//! DESIGN
//! ======
//! One slot, so success and error are mutually exclusive. A success message
//! is stamped with a ticket; its expiry timer only clears the slot if the
//! ticket still matches, so an older timer cannot wipe a newer message.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    Success { text: &'static str, ticket: u64 },
    Error { text: &'static str },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackState {
    current: Option<Feedback>,
    next_ticket: u64,
}

impl FeedbackState {
    /// Show a success message and return the ticket that may later expire it.
    pub fn success(&mut self, text: &'static str) -> u64 {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.current = Some(Feedback::Success { text, ticket });
        ticket
    }

    /// Show an error message, replacing any success message.
    pub fn error(&mut self, text: &'static str) {
        self.current = Some(Feedback::Error { text });
    }

    /// Clear the slot if it still holds the success message for `ticket`.
    pub fn expire(&mut self, ticket: u64) {
        if matches!(self.current, Some(Feedback::Success { ticket: t, .. }) if t == ticket) {
            self.current = None;
        }
    }

    pub fn success_text(&self) -> Option<&'static str> {
        match self.current {
            Some(Feedback::Success { text, .. }) => Some(text),
            _ => None,
        }
    }

    pub fn error_text(&self) -> Option<&'static str> {
        match self.current {
            Some(Feedback::Error { text }) => Some(text),
            _ => None,
        }
    }
}
