//! Text rendering of the view state.

use crate::view::ViewState;

/// Heading shown above the key list
pub const KEYS_HEADING: &str = "Current Cache Keys";

/// Renders the state as display lines: the error first, then the key list
/// when there is anything to list.
pub fn render(state: &ViewState) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(error) = &state.error {
        lines.push(format!("error: {}", error));
    }

    if state.is_visible() {
        lines.push(KEYS_HEADING.to_string());
        for (key, entry) in &state.snapshot {
            match &entry.expiration {
                Some(expiration) => lines.push(format!("  {}: (Expires at {})", key, expiration)),
                None => lines.push(format!("  {}", key)),
            }
        }
    }

    lines
}
