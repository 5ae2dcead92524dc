//! Per-mode presentation of the input panels
//!
//! The form shows one of two layouts. COMPLIANCE hides the old/new condition
//! panels and numbers the remaining panels 01-03; CHANGE shows all five.

use cronos_core::Mode;

/// Badge of the source-code panel, identical in both layouts
pub const SOURCE_BADGE: &str = "01";
/// Badge of the old-condition panel (CHANGE only)
pub const OLD_CONDITION_BADGE: &str = "02";
/// Badge of the new-condition panel (CHANGE only)
pub const NEW_CONDITION_BADGE: &str = "03";

/// Text and visibility of every input panel for one mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub mode: Mode,
    pub show_conditions: bool,
    pub expected_badge: &'static str,
    pub constraints_badge: &'static str,
    pub expected_hint: &'static str,
    pub analyze_label: &'static str,
}

impl PanelLayout {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Compliance => Self {
                mode,
                show_conditions: false,
                expected_badge: "02",
                constraints_badge: "03",
                expected_hint: "Describe the expected behavior (contract)",
                analyze_label: "Check Compliance",
            },
            Mode::Change => Self {
                mode,
                show_conditions: true,
                expected_badge: "04",
                constraints_badge: "05",
                expected_hint: "Describe expected behavior after change",
                analyze_label: "Analyze Change",
            },
        }
    }

    pub fn source_badge(&self) -> &'static str {
        SOURCE_BADGE
    }

    /// Badges of the old/new condition panels, `None` when they are hidden
    pub fn condition_badges(&self) -> Option<(&'static str, &'static str)> {
        self.show_conditions
            .then_some((OLD_CONDITION_BADGE, NEW_CONDITION_BADGE))
    }
}

/// Title and blurb of a mode card on the selection screen
pub fn mode_card(mode: Mode) -> (&'static str, &'static str) {
    match mode {
        Mode::Compliance => (
            "Compliance Check",
            "Verify that source code honors an expected-behavior contract",
        ),
        Mode::Change => (
            "Behavior Change",
            "Compare an old and a new condition for behavior drift",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compliance_layout() {
        let layout = PanelLayout::for_mode(Mode::Compliance);
        assert!(!layout.show_conditions);
        assert_eq!(layout.condition_badges(), None);
        assert_eq!(layout.expected_badge, "02");
        assert_eq!(layout.constraints_badge, "03");
        assert_eq!(layout.expected_hint, "Describe the expected behavior (contract)");
        assert_eq!(layout.analyze_label, "Check Compliance");
    }

    #[test]
    fn test_change_layout() {
        let layout = PanelLayout::for_mode(Mode::Change);
        assert!(layout.show_conditions);
        assert_eq!(layout.condition_badges(), Some(("02", "03")));
        assert_eq!(layout.expected_badge, "04");
        assert_eq!(layout.constraints_badge, "05");
        assert_eq!(layout.expected_hint, "Describe expected behavior after change");
        assert_eq!(layout.analyze_label, "Analyze Change");
    }

    #[test]
    fn test_source_badge_constant_across_modes() {
        for mode in Mode::ALL {
            assert_eq!(PanelLayout::for_mode(mode).source_badge(), "01");
        }
    }
}
