//! Submission lifecycle for form views:
//! `Idle → Submitting → Succeeded | Failed`, with `Failed` returning to
//! `Idle` on the next edit. While `Submitting`, [`FormPhase::begin`] refuses
//! re-entry, which is the double-submit guard.

use leptos::{RwSignal, SignalGetUntracked, SignalSet, SignalUpdate};

#[derive(Clone, Debug, PartialEq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl FormPhase {
    /// Enter `Submitting` unless a submission is already in flight.
    /// Returns whether the caller may proceed.
    pub fn begin(&mut self) -> bool {
        if matches!(self, FormPhase::Submitting) {
            return false;
        }
        *self = FormPhase::Submitting;
        true
    }

    pub fn succeed(&mut self) {
        *self = FormPhase::Succeeded;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = FormPhase::Failed(message.into());
    }

    /// A user edit clears a stale failure banner.
    pub fn edited(&mut self) {
        if matches!(self, FormPhase::Failed(_)) {
            *self = FormPhase::Idle;
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, FormPhase::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FormPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Signal-level double-submit guard.
pub fn try_begin(phase: RwSignal<FormPhase>) -> bool {
    let mut started = false;
    phase.update(|p| started = p.begin());
    started
}

pub fn note_edit(phase: RwSignal<FormPhase>) {
    if matches!(phase.get_untracked(), FormPhase::Failed(_)) {
        phase.set(FormPhase::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_refuses_reentry_while_submitting() {
        let mut phase = FormPhase::Idle;
        assert!(phase.begin());
        assert!(phase.is_submitting());
        // The rapid double-click: the second begin must not go through.
        assert!(!phase.begin());
    }

    #[test]
    fn failure_returns_to_idle_on_edit() {
        let mut phase = FormPhase::Idle;
        assert!(phase.begin());
        phase.fail("invalid credentials");
        assert_eq!(phase.error(), Some("invalid credentials"));
        phase.edited();
        assert_eq!(phase, FormPhase::Idle);
    }

    #[test]
    fn edit_does_not_disturb_other_phases() {
        let mut phase = FormPhase::Succeeded;
        phase.edited();
        assert_eq!(phase, FormPhase::Succeeded);
    }

    #[test]
    fn resubmission_is_possible_after_failure() {
        let mut phase = FormPhase::Idle;
        assert!(phase.begin());
        phase.fail("server error");
        assert!(phase.begin());
        phase.succeed();
        assert_eq!(phase, FormPhase::Succeeded);
    }

    #[test]
    fn signal_guard_blocks_a_second_inflight_submit() {
        let runtime = leptos::create_runtime();
        let phase = leptos::create_rw_signal(FormPhase::Idle);
        assert!(try_begin(phase));
        assert!(!try_begin(phase));
        runtime.dispose();
    }
}
