use crate::models::onboarding::{OnboardingState, ONBOARDING_STEPS};

/// Outcome of pressing the wizard's primary button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingTransition {
    /// Moved to the given step
    Advanced(u8),
    /// Finished the last step; the modal closes
    Completed,
    /// Wizard already closed; nothing happened
    Ignored,
}

/// Drives the three-step first-run wizard. Forward-only.
pub struct OnboardingService;

impl OnboardingService {
    pub fn new() -> Self {
        Self
    }

    pub fn advance(&self, state: &mut OnboardingState) -> OnboardingTransition {
        match *state {
            OnboardingState::Step(n) if n < ONBOARDING_STEPS => {
                *state = OnboardingState::Step(n + 1);
                OnboardingTransition::Advanced(n + 1)
            }
            OnboardingState::Step(_) => {
                *state = OnboardingState::Completed;
                OnboardingTransition::Completed
            }
            OnboardingState::Completed | OnboardingState::Skipped => OnboardingTransition::Ignored,
        }
    }

    /// Close without marking completion. Returns `false` if already closed.
    pub fn skip(&self, state: &mut OnboardingState) -> bool {
        if state.is_terminal() {
            return false;
        }
        *state = OnboardingState::Skipped;
        true
    }
}

impl Default for OnboardingService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states_ignore_advance() {
        let svc = OnboardingService::new();
        let mut s = OnboardingState::Skipped;
        assert_eq!(svc.advance(&mut s), OnboardingTransition::Ignored);
        assert_eq!(s, OnboardingState::Skipped);
        assert!(!svc.skip(&mut s));
    }
}
