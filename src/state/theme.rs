#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The persisted, explicit user choice of theme.
///
/// `Unset` means no choice has ever been stored; the effective theme then
/// follows the OS color-scheme signal. Stored values other than `"dark"` or
/// `"light"` decode as `Unset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Dark,
    Light,
    #[default]
    Unset,
}

impl ThemePreference {
    /// Decode the raw localStorage value at the boundary.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            Some("light") => Self::Light,
            _ => Self::Unset,
        }
    }

    /// The literal string persisted for this preference, if any.
    pub fn as_stored(self) -> Option<&'static str> {
        match self {
            Self::Dark => Some("dark"),
            Self::Light => Some("light"),
            Self::Unset => None,
        }
    }
}

/// The theme actually rendered at any instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EffectiveTheme {
    Dark,
    #[default]
    Light,
}

impl EffectiveTheme {
    pub fn inverse(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Marker class set on `<body>` for this theme.
    pub fn marker_class(self) -> &'static str {
        match self {
            Self::Dark => "dark-mode",
            Self::Light => "light-mode",
        }
    }

    /// The opposing marker class, removed whenever this theme is applied.
    /// Exactly one of the two markers is present once the controller runs.
    pub fn cleared_class(self) -> &'static str {
        self.inverse().marker_class()
    }

    /// Accessible label for the toggle control: names the *target* mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light mode",
            Self::Light => "Switch to dark mode",
        }
    }
}

/// Theme state machine: reconciles the stored preference, the OS
/// color-scheme signal, and explicit user toggles.
///
/// The machine is pure: reading storage, the media query, and the DOM
/// marker happens in `util::theme_dom`, which feeds inputs in and carries
/// the resulting `EffectiveTheme` (and any storage write) back out. Two
/// states {Dark, Light}; an explicit toggle pins the preference so later
/// OS signal changes are ignored for the rest of the page session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeController {
    preference: ThemePreference,
    effective: EffectiveTheme,
}

impl ThemeController {
    /// Compute the startup state from the stored preference and the OS
    /// signal. Stored choice wins; otherwise the OS signal decides, with
    /// Light as the default. Never writes storage.
    pub fn initialize(stored: Option<&str>, system_dark: bool) -> Self {
        let preference = ThemePreference::from_stored(stored);
        let effective = match preference {
            ThemePreference::Dark => EffectiveTheme::Dark,
            ThemePreference::Light => EffectiveTheme::Light,
            ThemePreference::Unset => {
                if system_dark {
                    EffectiveTheme::Dark
                } else {
                    EffectiveTheme::Light
                }
            }
        };
        Self {
            preference,
            effective,
        }
    }

    pub fn effective(self) -> EffectiveTheme {
        self.effective
    }

    pub fn preference(self) -> ThemePreference {
        self.preference
    }

    /// Whether an explicit choice exists, pinning the OS signal off.
    pub fn is_pinned(self) -> bool {
        self.preference != ThemePreference::Unset
    }

    /// Invert the effective theme and record it as the explicit preference.
    ///
    /// Returns the literal value to persist (`"dark"` or `"light"`). The
    /// caller applies the marker and performs the best-effort storage write.
    pub fn toggle(&mut self) -> &'static str {
        self.effective = self.effective.inverse();
        self.preference = match self.effective {
            EffectiveTheme::Dark => ThemePreference::Dark,
            EffectiveTheme::Light => ThemePreference::Light,
        };
        match self.effective {
            EffectiveTheme::Dark => "dark",
            EffectiveTheme::Light => "light",
        }
    }

    /// React to an OS color-scheme change. Ignored once an explicit
    /// preference exists. Returns `true` when the effective theme changed
    /// and the marker needs re-applying.
    pub fn on_system_preference_change(&mut self, is_dark: bool) -> bool {
        if self.is_pinned() {
            return false;
        }
        let next = if is_dark {
            EffectiveTheme::Dark
        } else {
            EffectiveTheme::Light
        };
        if next == self.effective {
            return false;
        }
        self.effective = next;
        true
    }
}
