#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Scroll distance (px) past which the header takes its compact style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// Fraction of the viewport height an element's top must clear before it
/// counts as revealed.
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.8;

/// Page chrome state: header, mobile navigation, preloader, active section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub header_scrolled: bool,
    pub nav_open: bool,
    pub preloader: PreloaderPhase,
    pub active_section: Option<&'static str>,
}

impl UiState {
    /// Recompute the header style from the current scroll offset.
    /// Returns `true` when the flag changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > HEADER_SCROLL_THRESHOLD;
        if scrolled == self.header_scrolled {
            return false;
        }
        self.header_scrolled = scrolled;
        true
    }

    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    /// Following a nav link marks the section active and closes the
    /// mobile menu.
    pub fn follow_link(&mut self, section: &'static str) {
        self.active_section = Some(section);
        self.nav_open = false;
    }
}

/// Preloader lifecycle. `Hiding` keeps the node in the tree for its fade
/// transition before `Hidden` removes it from display entirely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreloaderPhase {
    #[default]
    Loading,
    Hiding,
    Hidden,
}

impl PreloaderPhase {
    pub fn advance(self) -> Self {
        match self {
            Self::Loading => Self::Hiding,
            Self::Hiding | Self::Hidden => Self::Hidden,
        }
    }
}

/// Reveal-on-scroll predicate: the element's top has entered the lower
/// reveal band of the viewport and its bottom has not scrolled past the
/// top. Once revealed, elements stay revealed; callers never un-reveal.
pub fn in_reveal_zone(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top <= viewport_height * REVEAL_VIEWPORT_FRACTION && bottom >= 0.0
}
