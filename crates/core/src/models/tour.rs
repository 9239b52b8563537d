use serde::{Deserialize, Serialize};

/// One stop of the guided tour: a region selector and its tooltip text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourStep {
    pub selector: String,
    pub text: String,
}

impl TourStep {
    pub fn new(selector: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TourState {
    #[default]
    Closed,
    Showing(usize),
}

impl TourState {
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            TourState::Showing(i) => Some(*i),
            TourState::Closed => None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, TourState::Showing(_))
    }
}

/// On-screen bounds of a region, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// Where the tooltip card goes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TooltipPlacement {
    /// Absolute document coordinates next to the target region
    Anchored { top: f64, left: f64 },
    /// Target not found: horizontally centered at a fixed offset from the top
    Centered { top: f64 },
}

/// Render-ready tooltip for the current tour step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourView {
    pub index: usize,
    pub total: usize,
    /// Numbered text, e.g. "2. Assistant panel: ..."
    pub text: String,
    pub placement: TooltipPlacement,
}
