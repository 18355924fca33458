#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use crate::content::ProjectCategory;

/// How long a card flip animates before another flip is accepted (ms).
pub const FLIP_LOCK_MS: u32 = 800;

/// Category filter for the project grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Web,
    Mobile,
    Design,
}

impl ProjectFilter {
    pub const ALL: [Self; 4] = [Self::All, Self::Web, Self::Mobile, Self::Design];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Web => "Web",
            Self::Mobile => "Mobile",
            Self::Design => "Design",
        }
    }

    /// Whether a card of the given category shows under this filter.
    pub fn admits(self, category: ProjectCategory) -> bool {
        match self {
            Self::All => true,
            Self::Web => category == ProjectCategory::Web,
            Self::Mobile => category == ProjectCategory::Mobile,
            Self::Design => category == ProjectCategory::Design,
        }
    }
}

/// Per-card flip state. `animating` locks out further flips until the
/// 800 ms transition settles, so a double-click cannot leave the card
/// mid-turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlipCard {
    pub flipped: bool,
    animating: bool,
}

impl FlipCard {
    /// Request a flip to the back face. Returns `true` when the flip was
    /// granted and the caller should schedule `settle`.
    pub fn flip_to_back(&mut self) -> bool {
        self.request(true)
    }

    /// Request a flip to the front face.
    pub fn flip_to_front(&mut self) -> bool {
        self.request(false)
    }

    fn request(&mut self, to_back: bool) -> bool {
        if self.animating || self.flipped == to_back {
            return false;
        }
        self.flipped = to_back;
        self.animating = true;
        true
    }

    /// The flip transition finished; accept flips again.
    pub fn settle(&mut self) {
        self.animating = false;
    }
}
