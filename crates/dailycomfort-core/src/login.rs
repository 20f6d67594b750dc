//! PIN entry with on-screen masking.
//!
//! The input field never shows the real PIN. [`PinField`] keeps the typed
//! characters and hands back a string of mask glyphs for display; the host
//! feeds every change of the visible field back through
//! [`PinField::on_input`].
//!
//! A shorter field means deletions: the accumulator drops as many trailing
//! characters as the field shrank. Otherwise every non-mask character in
//! the field is newly typed and gets appended.

use std::time::Duration;

use crate::page::TimerEvent;
use crate::scheduler::{Scheduler, TimerId};

/// Accumulates the real PIN behind a masked field.
#[derive(Debug, Clone)]
pub struct PinField {
    mask: char,
    value: String,
}

impl PinField {
    pub fn new(mask: char) -> Self {
        Self {
            mask,
            value: String::new(),
        }
    }

    /// The real accumulated value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// One mask glyph per accumulated character.
    pub fn visible(&self) -> String {
        std::iter::repeat(self.mask).take(self.len()).collect()
    }

    /// Apply a change of the visible field and return what it should show.
    pub fn on_input(&mut self, field: &str) -> String {
        let field_len = field.chars().count();
        let tracked = self.len();

        if field_len < tracked {
            self.value = self.value.chars().take(field_len).collect();
        } else {
            self.value
                .extend(field.chars().filter(|&c| c != self.mask));
        }

        self.visible()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

/// Login form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    Idle,
    Typing,
    Success,
    Failure,
}

/// Result of submitting the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    Rejected,
}

/// The login form: masked field, error banner and shake animation.
#[derive(Debug)]
pub struct LoginFlow {
    field: PinField,
    state: LoginState,
    error_visible: bool,
    shake: Option<TimerId>,
}

impl LoginFlow {
    pub fn new(mask: char) -> Self {
        Self {
            field: PinField::new(mask),
            state: LoginState::Idle,
            error_visible: false,
            shake: None,
        }
    }

    pub fn state(&self) -> LoginState {
        self.state
    }

    pub fn field(&self) -> &PinField {
        &self.field
    }

    pub fn error_visible(&self) -> bool {
        self.error_visible
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_some()
    }

    /// Feed a change of the visible field. Typing hides the error banner.
    ///
    /// Input after a successful login is ignored.
    pub fn input(&mut self, field: &str) -> String {
        if self.state == LoginState::Success {
            return self.field.visible();
        }

        self.error_visible = false;
        self.state = LoginState::Typing;
        self.field.on_input(field)
    }

    /// Compare the accumulated value against `secret`.
    ///
    /// On mismatch the error banner shows, the field empties and a shake
    /// animation starts.
    pub fn submit(
        &mut self,
        secret: &str,
        scheduler: &mut Scheduler<TimerEvent>,
        shake: Duration,
    ) -> LoginOutcome {
        if self.state == LoginState::Success {
            return LoginOutcome::Accepted;
        }

        if self.field.value() == secret {
            self.state = LoginState::Success;
            self.error_visible = false;
            return LoginOutcome::Accepted;
        }

        self.state = LoginState::Failure;
        self.error_visible = true;
        self.field.clear();

        if let Some(previous) = self.shake.take() {
            scheduler.cancel(previous);
        }
        self.shake = Some(scheduler.schedule_after(shake, TimerEvent::ShakeEnded));

        LoginOutcome::Rejected
    }

    /// Shake animation finished.
    pub fn end_shake(&mut self, fired: TimerId) {
        if self.shake == Some(fired) {
            self.shake = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MASK: char = '•';

    fn type_chars(field: &mut PinField, chars: &str) -> String {
        let mut visible = field.visible();
        for c in chars.chars() {
            let mut next = visible.clone();
            next.push(c);
            visible = field.on_input(&next);
        }
        visible
    }

    #[test]
    fn test_typing_masks_every_character() {
        let mut field = PinField::new(MASK);
        let visible = type_chars(&mut field, "0105");

        assert_eq!(visible, "••••");
        assert_eq!(field.value(), "0105");
    }

    #[test]
    fn test_backspace_truncates() {
        let mut field = PinField::new(MASK);
        type_chars(&mut field, "010523");

        let visible = field.on_input("••••");
        assert_eq!(visible, "••••");
        assert_eq!(field.value(), "0105");

        let visible = field.on_input("");
        assert_eq!(visible, "");
        assert!(field.is_empty());
    }

    #[test]
    fn test_paste_appends_all_characters() {
        let mut field = PinField::new(MASK);
        type_chars(&mut field, "01");

        field.on_input("••0523");
        assert_eq!(field.value(), "010523");
        assert_eq!(field.visible(), "••••••");
    }

    #[test]
    fn test_wrong_pin_clears_and_shakes() {
        let mut scheduler = Scheduler::new();
        let mut flow = LoginFlow::new(MASK);
        flow.input("1");
        flow.input("•2");

        let outcome = flow.submit("010523", &mut scheduler, Duration::from_millis(500));
        assert_eq!(outcome, LoginOutcome::Rejected);
        assert_eq!(flow.state(), LoginState::Failure);
        assert!(flow.error_visible());
        assert!(flow.field().is_empty());
        assert!(flow.is_shaking());

        let (fired, event) = scheduler.pop_due(Duration::from_millis(500)).unwrap();
        assert_eq!(event, TimerEvent::ShakeEnded);
        flow.end_shake(fired);
        assert!(!flow.is_shaking());
    }

    #[test]
    fn test_typing_hides_error() {
        let mut scheduler = Scheduler::new();
        let mut flow = LoginFlow::new(MASK);
        flow.submit("010523", &mut scheduler, Duration::from_millis(500));
        assert!(flow.error_visible());

        flow.input("7");
        assert!(!flow.error_visible());
        assert_eq!(flow.state(), LoginState::Typing);
    }

    #[test]
    fn test_empty_submission_is_rejected() {
        let mut scheduler = Scheduler::new();
        let mut flow = LoginFlow::new(MASK);
        assert_eq!(
            flow.submit("010523", &mut scheduler, Duration::from_millis(500)),
            LoginOutcome::Rejected
        );
    }

    #[test]
    fn test_correct_pin_is_accepted_and_locks_input() {
        let mut scheduler = Scheduler::new();
        let mut flow = LoginFlow::new(MASK);
        type_chars_flow(&mut flow, "010523");

        let outcome = flow.submit("010523", &mut scheduler, Duration::from_millis(500));
        assert_eq!(outcome, LoginOutcome::Accepted);
        assert_eq!(flow.state(), LoginState::Success);
        assert_eq!(scheduler.pending(), 0);

        assert_eq!(flow.input("••••••9"), "••••••");
        assert_eq!(flow.field().value(), "010523");
    }

    fn type_chars_flow(flow: &mut LoginFlow, chars: &str) {
        let mut visible = flow.field().visible();
        for c in chars.chars() {
            let mut next = visible.clone();
            next.push(c);
            visible = flow.input(&next);
        }
    }
}
