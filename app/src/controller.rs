// src/controller.rs

use std::rc::Rc;

use yew::Reducible;

use crate::classify::{classify, Classification};

pub const EMPTY_SUBMIT_MESSAGE: &str = "Please enter a file hash or IP address.";
pub const VALID_MESSAGE: &str = "Valid format detected";
pub const INVALID_MESSAGE: &str = "Invalid format";
pub const BUSY_LABEL: &str = "Analyzing...";
pub const IDLE_LABEL: &str = "Scan";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Neutral,
    Valid,
    Invalid,
}

impl FieldState {
    pub fn class(self) -> Option<&'static str> {
        match self {
            FieldState::Neutral => None,
            FieldState::Valid => Some("is-valid"),
            FieldState::Invalid => Some("is-invalid"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub classification: Classification,
}

impl Feedback {
    pub fn message(&self) -> &'static str {
        if self.classification.is_valid() {
            VALID_MESSAGE
        } else {
            INVALID_MESSAGE
        }
    }

    pub fn text_class(&self) -> &'static str {
        if self.classification.is_valid() {
            "text-success"
        } else {
            "text-danger"
        }
    }

    pub fn icon(&self) -> &'static str {
        if self.classification.is_valid() {
            "fa-check-circle"
        } else {
            "fa-exclamation-triangle"
        }
    }

    pub fn detail(&self) -> Option<String> {
        self.classification
            .is_valid()
            .then(|| self.classification.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub value: String,
    pub field: FieldState,
    pub feedback: Option<Feedback>,
    pub error: Option<String>,
    pub phase: Phase,
}

impl FormState {
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    // hidden `scan_input` field; the visible one is disabled while submitting
    pub fn submitted_value(&self) -> &str {
        self.value.trim()
    }

    pub fn controls_disabled(&self) -> bool {
        self.is_submitting()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            BUSY_LABEL
        } else {
            IDLE_LABEL
        }
    }

    pub fn button_icon(&self) -> &'static str {
        if self.is_submitting() {
            "fa-spinner fa-spin"
        } else {
            "fa-search"
        }
    }

    pub fn button_class(&self) -> Vec<&'static str> {
        let mut class = vec!["btn", "btn-primary"];
        if self.is_submitting() {
            class.push("loading");
        }
        class
    }
}

pub enum FormAction {
    Input(String),
    RejectEmpty,
    BeginSubmit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Blocked,
    Proceed,
}

/// Gate applied in the submit handler, before the browser commits to the POST.
/// Only emptiness blocks; a bad format is left for the server to reject.
pub fn submit_outcome(value: &str) -> SubmitOutcome {
    if value.trim().is_empty() {
        SubmitOutcome::Blocked
    } else {
        SubmitOutcome::Proceed
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.is_submitting() {
            return self;
        }

        match action {
            FormAction::Input(value) => {
                let classification = classify(&value);
                let field = match classification {
                    None => FieldState::Neutral,
                    Some(c) if c.is_valid() => FieldState::Valid,
                    Some(_) => FieldState::Invalid,
                };
                Rc::new(FormState {
                    value,
                    field,
                    feedback: classification.map(|classification| Feedback { classification }),
                    error: None,
                    phase: Phase::Editing,
                })
            }
            FormAction::RejectEmpty => Rc::new(FormState {
                field: FieldState::Invalid,
                feedback: None,
                error: Some(EMPTY_SUBMIT_MESSAGE.to_string()),
                ..(*self).clone()
            }),
            FormAction::BeginSubmit => Rc::new(FormState {
                error: None,
                phase: Phase::Submitting,
                ..(*self).clone()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::HashKind;

    fn apply(state: Rc<FormState>, action: FormAction) -> Rc<FormState> {
        state.reduce(action)
    }

    fn typed(value: &str) -> Rc<FormState> {
        apply(Rc::new(FormState::default()), FormAction::Input(value.to_string()))
    }

    #[test]
    fn test_valid_ip_marks_field_valid() {
        let s = typed("10.0.0.1");
        assert_eq!(s.field, FieldState::Valid);
        let fb = s.feedback.as_ref().unwrap();
        assert_eq!(fb.message(), VALID_MESSAGE);
        assert_eq!(fb.text_class(), "text-success");
        assert_eq!(fb.detail().as_deref(), Some("IPv4 address (10.0.0.1)"));
    }

    #[test]
    fn test_invalid_input_is_advisory() {
        let s = typed("not-a-hash!");
        assert_eq!(s.field, FieldState::Invalid);
        let fb = s.feedback.as_ref().unwrap();
        assert_eq!(fb.message(), INVALID_MESSAGE);
        assert_eq!(fb.icon(), "fa-exclamation-triangle");
        assert_eq!(fb.detail(), None);
        assert_eq!(submit_outcome(&s.value), SubmitOutcome::Proceed);
    }

    #[test]
    fn test_feedback_replaced_on_each_input() {
        let s = typed("d41d8cd98f00b204e9800998ecf8427");
        assert_eq!(s.field, FieldState::Invalid);
        let s = apply(s, FormAction::Input("d41d8cd98f00b204e9800998ecf8427e".into()));
        assert_eq!(s.field, FieldState::Valid);
        assert_eq!(
            s.feedback,
            Some(Feedback {
                classification: Classification::Hash(HashKind::Md5)
            })
        );
    }

    #[test]
    fn test_empty_input_clears_feedback_and_class() {
        let s = typed("8.8.8.8");
        let s = apply(s, FormAction::Input("   ".into()));
        assert_eq!(s.field, FieldState::Neutral);
        assert_eq!(s.field.class(), None);
        assert!(s.feedback.is_none());
    }

    #[test]
    fn test_whitespace_submit_is_blocked() {
        assert_eq!(submit_outcome(""), SubmitOutcome::Blocked);
        assert_eq!(submit_outcome(" \t "), SubmitOutcome::Blocked);

        let s = apply(typed("  "), FormAction::RejectEmpty);
        assert_eq!(s.error.as_deref(), Some(EMPTY_SUBMIT_MESSAGE));
        assert_eq!(s.field.class(), Some("is-invalid"));
        assert_eq!(s.phase, Phase::Editing);
    }

    #[test]
    fn test_next_input_clears_submit_error() {
        let s = apply(Rc::new(FormState::default()), FormAction::RejectEmpty);
        let s = apply(s, FormAction::Input("1".into()));
        assert!(s.error.is_none());
    }

    #[test]
    fn test_submit_enters_submitting_phase() {
        let s = typed("  8.8.4.4  ");
        assert_eq!(submit_outcome(&s.value), SubmitOutcome::Proceed);
        let s = apply(s, FormAction::BeginSubmit);
        assert!(s.is_submitting());
        assert_eq!(s.submitted_value(), "8.8.4.4");
        assert_eq!(s.field, FieldState::Valid);
    }

    #[test]
    fn test_editing_form_is_enabled() {
        let s = typed("8.8.8.8");
        assert!(!s.controls_disabled());
        assert_eq!(s.button_label(), IDLE_LABEL);
        assert_eq!(s.button_icon(), "fa-search");
        assert_eq!(s.button_class(), vec!["btn", "btn-primary"]);
    }

    #[test]
    fn test_submit_disables_controls_and_swaps_label() {
        let s = apply(typed("  d41d8cd98f00b204e9800998ecf8427e "), FormAction::BeginSubmit);
        assert!(s.controls_disabled());
        assert_eq!(s.button_label(), BUSY_LABEL);
        assert_eq!(s.button_icon(), "fa-spinner fa-spin");
        assert_eq!(s.button_class(), vec!["btn", "btn-primary", "loading"]);
        assert_eq!(s.submitted_value(), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_blocked_submit_keeps_controls_enabled() {
        let s = apply(typed(" "), FormAction::RejectEmpty);
        assert!(!s.controls_disabled());
        assert_eq!(s.button_label(), IDLE_LABEL);
    }

    #[test]
    fn test_submitting_ignores_further_events() {
        let s = apply(typed("8.8.8.8"), FormAction::BeginSubmit);
        let after = apply(s.clone(), FormAction::Input("changed".into()));
        assert!(Rc::ptr_eq(&s, &after));
        let after = apply(s.clone(), FormAction::RejectEmpty);
        assert!(Rc::ptr_eq(&s, &after));
    }
}
