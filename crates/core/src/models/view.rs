use serde::{Deserialize, Serialize};

/// Panels under the positions section. Exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Positions,
    Orders,
    Algorithms,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Positions, Tab::Orders, Tab::Algorithms];

    /// Panel identifier, also the lowercase tab label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Positions => "positions",
            Tab::Orders => "orders",
            Tab::Algorithms => "algorithms",
        }
    }

    /// Case-insensitive match against the tab label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Tab::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level views. Exactly one is visible; switching never drops the other's state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Education,
}

/// Outcome of a nav-link click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Switched (or stayed) on a known view
    Shown(View),
    /// No view exists for this target; carries the bare section name
    Unrecognized(String),
}
