use serde::{Deserialize, Serialize};

/// Badge background color, derived from the distinct-tracker count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeColor {
    Green,
    Orange,
    Red,
}

impl BadgeColor {
    /// Hex value the extension shell paints with.
    pub fn hex(self) -> &'static str {
        match self {
            BadgeColor::Green => "#43A047",
            BadgeColor::Orange => "#FB8C00",
            BadgeColor::Red => "#E53935",
        }
    }
}

/// Derived per-tab badge state: text plus background color.
///
/// Not persisted authoritatively; always recomputed from the session's
/// distinct-tracker count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeState {
    pub text: String,
    pub color: BadgeColor,
}

impl BadgeState {
    /// Empty text at zero, the count otherwise; green under 6 trackers,
    /// orange for 6-10, red above 10.
    pub fn for_count(count: usize) -> Self {
        let text = if count > 0 {
            count.to_string()
        } else {
            String::new()
        };
        let color = if count > 10 {
            BadgeColor::Red
        } else if count > 5 {
            BadgeColor::Orange
        } else {
            BadgeColor::Green
        };
        Self { text, color }
    }

    /// The state used to clear a tab's badge on navigation.
    pub fn cleared() -> Self {
        Self::for_count(0)
    }
}
