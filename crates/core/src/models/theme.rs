use serde::{Deserialize, Serialize};

/// Color scheme preference, persisted as a bare string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Storage representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Anything other than the literal `"dark"` reads as light.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Label for the toggle control: the theme it would switch to.
    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Dark",
            ThemePreference::Dark => "Light",
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
