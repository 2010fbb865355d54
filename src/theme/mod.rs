//! Light/dark presentation mode.
//!
//! The stylesheet is dark by default; light mode is a single class on
//! `<body>`. The toggle button shows the icon of the mode you would switch
//! *from*: a sun while dark, a moon while light.

use std::fmt;

/// Class added to `<body>` in light mode.
pub const LIGHT_MODE_CLASS: &str = "light-mode";

/// Icon shown on the toggle while the page is dark.
pub const SUN_ICON: &str = r#"<svg class="sun-icon" xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="5"></circle><line x1="12" y1="1" x2="12" y2="3"></line><line x1="12" y1="21" x2="12" y2="23"></line><line x1="4.22" y1="4.22" x2="5.64" y2="5.64"></line><line x1="18.36" y1="18.36" x2="19.78" y2="19.78"></line><line x1="1" y1="12" x2="3" y2="12"></line><line x1="21" y1="12" x2="23" y2="12"></line><line x1="4.22" y1="19.78" x2="5.64" y2="18.36"></line><line x1="18.36" y1="5.64" x2="19.78" y2="4.22"></line></svg>"#;

/// Icon shown on the toggle while the page is light.
pub const MOON_ICON: &str = r#"<svg class="moon-icon" xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path></svg>"#;

/// Presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light background.
    Light,
    /// Dark background (default).
    #[default]
    Dark,
}

impl ThemeMode {
    /// Parse a persisted value. Anything other than `light` is dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    /// Value written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Toggle button markup for this mode.
    pub fn icon(self) -> &'static str {
        match self {
            ThemeMode::Light => MOON_ICON,
            ThemeMode::Dark => SUN_ICON,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
