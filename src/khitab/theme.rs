//! Light/dark palette preference: an explicit saved choice wins, otherwise
//! the system preference is detected.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {} (expected light or dark)", other)),
        }
    }
}

/// Resolve the effective theme: saved preference if any, else the system
/// preference, else light.
pub fn effective(preference: Option<Theme>) -> Theme {
    preference.unwrap_or_else(detect_system)
}

fn detect_system() -> Theme {
    match dark_light::detect() {
        dark_light::Mode::Dark => Theme::Dark,
        _ => Theme::Light,
    }
}
