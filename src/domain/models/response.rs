use serde::{Deserialize, Serialize};

/// Outcome of handling one event. `Failed` dominates when responses are
/// combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    #[default]
    None,
    Processed,
    Failed,
}

impl EventStatus {
    fn severity(self) -> u8 {
        match self {
            EventStatus::None => 0,
            EventStatus::Processed => 1,
            EventStatus::Failed => 2,
        }
    }
}

/// Mutable accumulator of per-operation outcomes.
///
/// Expected failure modes end up here as error strings; the response is
/// always returned to the caller rather than raised. `combine` is
/// associative so responses from sequential steps (dependency loop, handler
/// dispatch) can be folded together while preserving partial results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResponse {
    status: EventStatus,
    errors: Vec<String>,
    messages: Vec<String>,
}

impl EventResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> EventStatus {
        self.status
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Records an error and forces the status to `Failed`.
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.status = EventStatus::Failed;
    }

    pub fn add_errors(&mut self, errors: impl IntoIterator<Item = String>) {
        for error in errors {
            self.add_error(error);
        }
    }

    pub fn add_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
        if self.status == EventStatus::None {
            self.status = EventStatus::Processed;
        }
    }

    pub fn mark_processed(&mut self) {
        if self.status != EventStatus::Failed {
            self.status = EventStatus::Processed;
        }
    }

    /// Merges `other` into this response. The combined status is the more
    /// severe of the two.
    pub fn combine(&mut self, other: EventResponse) {
        if other.status.severity() > self.status.severity() {
            self.status = other.status;
        }
        self.errors.extend(other.errors);
        self.messages.extend(other.messages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_error_forces_failed() {
        let mut response = EventResponse::new();
        assert_eq!(response.status(), EventStatus::None);

        response.add_message("step one done");
        assert_eq!(response.status(), EventStatus::Processed);

        response.add_error("step two failed");
        assert_eq!(response.status(), EventStatus::Failed);
        assert!(response.has_errors());

        // Later messages cannot clear a failure.
        response.add_message("step three done");
        response.mark_processed();
        assert_eq!(response.status(), EventStatus::Failed);
    }

    #[test]
    fn test_combine_is_failed_dominant() {
        let mut ok = EventResponse::new();
        ok.add_message("fine");

        let mut failed = EventResponse::new();
        failed.add_error("broken");

        ok.combine(failed);

        assert_eq!(ok.status(), EventStatus::Failed);
        assert_eq!(ok.errors(), ["broken"]);
        assert_eq!(ok.messages(), ["fine"]);
    }

    #[test]
    fn test_combine_is_associative() {
        let mut a = EventResponse::new();
        a.add_message("a");
        let mut b = EventResponse::new();
        b.add_error("b");
        let mut c = EventResponse::new();
        c.add_message("c");

        let mut left = a.clone();
        left.combine(b.clone());
        left.combine(c.clone());

        let mut right_tail = b;
        right_tail.combine(c);
        let mut right = a;
        right.combine(right_tail);

        assert_eq!(left, right);
    }
}
