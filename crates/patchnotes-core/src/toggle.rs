//! Per-item expand/collapse state machine
//!
//! Every disclosure item owns one [`ItemToggle`]. Activating the item's head
//! flips it between [`DisclosureState::Collapsed`] and
//! [`DisclosureState::Expanded`]; nothing else changes it.
//!
//! The panel height is driven by the content height measured at toggle time
//! rather than a fixed value, since entries are free text of any length.

/// Extra height added to the measured content so the panel's own padding
/// is not clipped when expanded
pub const PANEL_PADDING_PX: f64 = 14.0;

/// Visual state of one disclosure item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisclosureState {
    #[default]
    Collapsed,
    Expanded,
}

impl DisclosureState {
    /// The opposite state
    pub fn flipped(self) -> Self {
        match self {
            DisclosureState::Collapsed => DisclosureState::Expanded,
            DisclosureState::Expanded => DisclosureState::Collapsed,
        }
    }
}

/// Toggle state owned by a single disclosure item
///
/// # Example
///
/// ```rust
/// use patchnotes_core::{DisclosureState, ItemToggle};
///
/// let mut toggle = ItemToggle::new();
/// assert_eq!(toggle.aria_expanded(), "false");
///
/// assert_eq!(toggle.activate(120.0), DisclosureState::Expanded);
/// assert_eq!(toggle.panel_height(), 134.0);
///
/// assert_eq!(toggle.activate(120.0), DisclosureState::Collapsed);
/// assert_eq!(toggle.panel_height(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemToggle {
    state: DisclosureState,
    panel_height: f64,
}

impl ItemToggle {
    /// A collapsed toggle with a zero-height panel
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the state in response to the head being activated.
    ///
    /// `content_height` is the panel's content height measured right now;
    /// it is only used when expanding. Returns the new state.
    pub fn activate(&mut self, content_height: f64) -> DisclosureState {
        self.state = self.state.flipped();
        self.panel_height = match self.state {
            DisclosureState::Expanded => sanitize_height(content_height) + PANEL_PADDING_PX,
            DisclosureState::Collapsed => 0.0,
        };
        self.state
    }

    pub fn state(&self) -> DisclosureState {
        self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state == DisclosureState::Expanded
    }

    /// Value for the head's `aria-expanded` attribute
    pub fn aria_expanded(&self) -> &'static str {
        if self.is_expanded() {
            "true"
        } else {
            "false"
        }
    }

    /// Current panel height in pixels (0 when collapsed)
    pub fn panel_height(&self) -> f64 {
        self.panel_height
    }

    /// Inline style applied to the panel element
    pub fn panel_style(&self) -> String {
        format!("max-height: {}px;", self.panel_height)
    }
}

fn sanitize_height(height: f64) -> f64 {
    if height.is_finite() && height > 0.0 {
        height
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let toggle = ItemToggle::new();
        assert_eq!(toggle.state(), DisclosureState::Collapsed);
        assert!(!toggle.is_expanded());
        assert_eq!(toggle.aria_expanded(), "false");
        assert_eq!(toggle.panel_height(), 0.0);
    }

    #[test]
    fn test_expand_uses_measured_height() {
        let mut toggle = ItemToggle::new();
        toggle.activate(300.5);
        assert!(toggle.is_expanded());
        assert_eq!(toggle.aria_expanded(), "true");
        assert_eq!(toggle.panel_height(), 314.5);
        assert_eq!(toggle.panel_style(), "max-height: 314.5px;");
    }

    #[test]
    fn test_collapse_resets_height() {
        let mut toggle = ItemToggle::new();
        toggle.activate(80.0);
        toggle.activate(80.0);
        assert_eq!(toggle.state(), DisclosureState::Collapsed);
        assert_eq!(toggle.panel_height(), 0.0);
        assert_eq!(toggle.panel_style(), "max-height: 0px;");
    }

    #[test]
    fn test_remeasures_on_each_expand() {
        let mut toggle = ItemToggle::new();
        toggle.activate(50.0);
        toggle.activate(50.0);
        toggle.activate(90.0);
        assert_eq!(toggle.panel_height(), 104.0);
    }

    #[test]
    fn test_bad_measurements_count_as_zero() {
        for height in [f64::NAN, f64::INFINITY, -20.0] {
            let mut toggle = ItemToggle::new();
            toggle.activate(height);
            assert_eq!(toggle.panel_height(), PANEL_PADDING_PX);
        }
    }
}
