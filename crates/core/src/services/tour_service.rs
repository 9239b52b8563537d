use std::collections::HashMap;

use crate::models::tour::{Rect, TooltipPlacement, TourState, TourStep, TourView};

/// Minimum distance of the tooltip from the document edge, and its offset
/// from the target's corner.
const EDGE_MARGIN: f64 = 10.0;

/// Top offset of the fallback centered tooltip.
const CENTERED_TOP: f64 = 80.0;

/// Reports where named regions currently sit on screen.
///
/// Implemented by the rendering surface; the core only does the placement
/// arithmetic.
pub trait RegionLocator {
    /// Viewport bounds of the region matching `selector`, if it exists.
    fn bounds(&self, selector: &str) -> Option<Rect>;

    /// Current document scroll offset `(x, y)`.
    fn scroll_offset(&self) -> (f64, f64) {
        (0.0, 0.0)
    }
}

/// Fixed layout, for hosts that know their geometry up front and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    regions: HashMap<String, Rect>,
    scroll: (f64, f64),
}

impl StaticLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, selector: impl Into<String>, rect: Rect) -> Self {
        self.regions.insert(selector.into(), rect);
        self
    }

    pub fn with_scroll(mut self, x: f64, y: f64) -> Self {
        self.scroll = (x, y);
        self
    }
}

impl RegionLocator for StaticLayout {
    fn bounds(&self, selector: &str) -> Option<Rect> {
        self.regions.get(selector).copied()
    }

    fn scroll_offset(&self) -> (f64, f64) {
        self.scroll
    }
}

/// Linear guided tour over a fixed step sequence.
pub struct TourService {
    steps: Vec<TourStep>,
}

impl TourService {
    pub fn new(steps: Vec<TourStep>) -> Self {
        Self { steps }
    }

    #[must_use]
    pub fn steps(&self) -> &[TourStep] {
        &self.steps
    }

    /// Open at the first step (restarting if already open).
    /// A tour without steps stays closed.
    pub fn start(&self, state: &mut TourState) -> TourState {
        *state = if self.steps.is_empty() {
            TourState::Closed
        } else {
            TourState::Showing(0)
        };
        *state
    }

    /// Advance, or close after the last step.
    pub fn next(&self, state: &mut TourState) -> TourState {
        if let TourState::Showing(i) = *state {
            *state = if i + 1 < self.steps.len() {
                TourState::Showing(i + 1)
            } else {
                TourState::Closed
            };
        }
        *state
    }

    /// Step back; no-op on the first step or when closed.
    pub fn prev(&self, state: &mut TourState) -> TourState {
        if let TourState::Showing(i) = *state {
            if i > 0 {
                *state = TourState::Showing(i - 1);
            }
        }
        *state
    }

    pub fn close(&self, state: &mut TourState) -> TourState {
        *state = TourState::Closed;
        *state
    }

    #[must_use]
    pub fn current_step(&self, state: &TourState) -> Option<&TourStep> {
        state.index().and_then(|i| self.steps.get(i))
    }

    /// Tooltip for the current step, positioned next to its region or
    /// centered when the region is absent.
    #[must_use]
    pub fn render(&self, state: &TourState, locator: &dyn RegionLocator) -> Option<TourView> {
        let index = state.index()?;
        let step = self.steps.get(index)?;

        let placement = match locator.bounds(&step.selector) {
            Some(rect) => {
                let (scroll_x, scroll_y) = locator.scroll_offset();
                TooltipPlacement::Anchored {
                    top: (rect.top + scroll_y + EDGE_MARGIN).max(EDGE_MARGIN),
                    left: (rect.left + scroll_x + EDGE_MARGIN).max(EDGE_MARGIN),
                }
            }
            None => TooltipPlacement::Centered { top: CENTERED_TOP },
        };

        Some(TourView {
            index,
            total: self.steps.len(),
            text: format!("{}. {}", index + 1, step.text),
            placement,
        })
    }
}
