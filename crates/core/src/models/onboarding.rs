use serde::{Deserialize, Serialize};

/// Number of steps in the first-run wizard.
pub const ONBOARDING_STEPS: u8 = 3;

/// First-run wizard state.
///
/// `Step(n)` always holds `1..=ONBOARDING_STEPS`. `Completed` and `Skipped`
/// are terminal and both hide the modal; only `Completed` marks onboarding
/// as finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnboardingState {
    Step(u8),
    Completed,
    Skipped,
}

impl Default for OnboardingState {
    fn default() -> Self {
        OnboardingState::Step(1)
    }
}

impl OnboardingState {
    /// Current step while the wizard is open.
    #[must_use]
    pub fn step(&self) -> Option<u8> {
        match self {
            OnboardingState::Step(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_modal_visible(&self) -> bool {
        matches!(self, OnboardingState::Step(_))
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, OnboardingState::Completed)
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !self.is_modal_visible()
    }

    /// Lit progress dots, one per step reached.
    #[must_use]
    pub fn progress_dots(&self) -> [bool; ONBOARDING_STEPS as usize] {
        let reached = self.step().unwrap_or(0);
        std::array::from_fn(|i| (i as u8) < reached)
    }

    #[must_use]
    pub fn next_button_label(&self) -> &'static str {
        match self.step() {
            Some(ONBOARDING_STEPS) => "Get Started",
            _ => "Next",
        }
    }
}
