use shared::FlashMessage;

/// Where the submission currently stands. `Submitting` is terminal: once the
/// native POST is allowed through, the only way out is the browser completing
/// or failing the navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
}

/// Outcome of a submit gesture.
#[derive(Debug, PartialEq)]
pub enum SubmitDecision {
    /// Let the native form submission proceed.
    Proceed,
    /// Suppress the native submission; carries a flash when the user should
    /// hear about it.
    Abort(Option<FlashMessage>),
}

/// Validates on submit and drives Idle → Validating → Submitting. Everything
/// after `Proceed` belongs to the browser's own submission machinery.
#[derive(Debug, Default)]
pub struct FormSubmissionController {
    state: SubmissionState,
}

impl FormSubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Handles a submit gesture against the current staged-file count.
    /// Gestures outside `Idle` are ignored.
    pub fn try_begin(&mut self, staged_count: usize) -> SubmitDecision {
        if self.state != SubmissionState::Idle {
            return SubmitDecision::Abort(None);
        }

        self.state = SubmissionState::Validating;
        if staged_count == 0 {
            self.state = SubmissionState::Idle;
            return SubmitDecision::Abort(Some(FlashMessage::error(
                "Please select at least one file to upload.",
            )));
        }

        self.state = SubmissionState::Submitting;
        SubmitDecision::Proceed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::FlashSeverity;

    #[test]
    fn empty_selection_blocks_submission_and_recovers() {
        let mut controller = FormSubmissionController::new();

        match controller.try_begin(0) {
            SubmitDecision::Abort(Some(flash)) => {
                assert_eq!(flash.severity, FlashSeverity::Error);
            }
            other => panic!("expected a user-visible abort, got {other:?}"),
        }
        assert_eq!(controller.state(), SubmissionState::Idle);

        // Still usable after the failed validation.
        assert_eq!(controller.try_begin(3), SubmitDecision::Proceed);
        assert!(controller.is_submitting());
    }

    #[test]
    fn non_empty_selection_proceeds_to_submitting() {
        let mut controller = FormSubmissionController::new();
        assert_eq!(controller.try_begin(1), SubmitDecision::Proceed);
        assert_eq!(controller.state(), SubmissionState::Submitting);
    }

    #[test]
    fn submitting_is_terminal_for_the_controller() {
        let mut controller = FormSubmissionController::new();
        assert_eq!(controller.try_begin(2), SubmitDecision::Proceed);

        // A second gesture while in flight is silently ignored.
        assert_eq!(controller.try_begin(2), SubmitDecision::Abort(None));
        assert_eq!(controller.try_begin(0), SubmitDecision::Abort(None));
        assert!(controller.is_submitting());
    }
}
