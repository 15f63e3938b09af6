//! Navigation drawer state.
//!
//! The drawer's open/closed flag is stored redundantly: once on the drawer
//! itself (`visible`) and once on the toggle control (`expanded`), mirroring
//! how assistive technology sees a disclosure widget (the control reports
//! expanded state separately from the region it controls). The two must agree
//! at all times; [`NavState::toggle`] is the only mutation and flips both.

/// A single entry in the navigation drawer. Display-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Two-digit index badge shown before the label ("00", "01", ...)
    pub badge: String,
    pub label: String,
}

impl NavEntry {
    pub fn new(badge: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            badge: badge.into(),
            label: label.into(),
        }
    }
}

/// Open/closed state of the navigation drawer.
#[derive(Debug, Clone)]
pub struct NavState {
    visible: bool,
    expanded: bool,
    entries: Vec<NavEntry>,
}

impl NavState {
    /// Create a closed drawer with the given entries.
    pub fn closed(entries: Vec<NavEntry>) -> Self {
        Self {
            visible: false,
            expanded: false,
            entries,
        }
    }

    /// Create an open drawer with the given entries.
    pub fn open(entries: Vec<NavEntry>) -> Self {
        Self {
            visible: true,
            expanded: true,
            entries,
        }
    }

    /// Flip the drawer between open and closed.
    ///
    /// Both halves of the redundant pair change together, so the agreement
    /// invariant holds across the flip. Toggling twice restores the original
    /// state.
    pub fn toggle(&mut self) {
        let open = !self.visible;
        self.visible = open;
        self.expanded = open;
        debug_assert!(self.is_consistent());
    }

    /// Whether the drawer region is shown.
    pub fn is_open(&self) -> bool {
        self.visible
    }

    /// Whether the toggle control reports itself expanded.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// The redundant pair must agree.
    pub fn is_consistent(&self) -> bool {
        self.visible == self.expanded
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<NavEntry> {
        vec![
            NavEntry::new("00", "Home"),
            NavEntry::new("01", "Destination"),
        ]
    }

    #[test]
    fn test_toggle_opens_then_closes() {
        let mut nav = NavState::closed(sample());
        assert!(!nav.is_open());
        assert!(!nav.is_expanded());

        nav.toggle();
        assert!(nav.is_open());
        assert!(nav.is_expanded());

        nav.toggle();
        assert!(!nav.is_open());
        assert!(!nav.is_expanded());
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut nav = NavState::open(sample());
        let before = (nav.is_open(), nav.is_expanded());
        nav.toggle();
        nav.toggle();
        assert_eq!((nav.is_open(), nav.is_expanded()), before);
    }

    #[test]
    fn test_pair_always_agrees() {
        let mut nav = NavState::closed(sample());
        for _ in 0..5 {
            assert!(nav.is_consistent());
            nav.toggle();
        }
        assert!(nav.is_consistent());
    }
}
