//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
    /// End the current session
    Logout,
}

/// Navigation actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum NavAction {
    /// Go to the login form
    Login,
    /// Go to the seat demo
    Seats,
}

impl NavAction {
    /// Keystroke bound to this action
    pub fn keystroke(self) -> &'static str {
        match self {
            NavAction::Login => "secondary-1",
            NavAction::Seats => "secondary-2",
        }
    }
}

/// Convert a keystroke string to human-readable format
///
/// Platform-specific formatting:
/// - macOS: ⌘ for cmd, ⌥ for alt, ⌃ for ctrl, ⇧ for shift
/// - Others: Ctrl+, Alt+, Shift+
pub fn humanize_keystroke(keystroke: &str) -> String {
    #[cfg(target_os = "macos")]
    let separator = "";
    #[cfg(not(target_os = "macos"))]
    let separator = "+";

    keystroke
        .split('-')
        .map(|part| match part {
            "secondary" | "cmd" => platform_symbol("⌘", "Ctrl"),
            "ctrl" => platform_symbol("⌃", "Ctrl"),
            "alt" => platform_symbol("⌥", "Alt"),
            "shift" => platform_symbol("⇧", "Shift"),
            "enter" => "Enter".to_string(),
            "escape" => "Esc".to_string(),
            c => c.to_uppercase(),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

fn platform_symbol(macos: &str, other: &str) -> String {
    if cfg!(target_os = "macos") {
        macos.to_string()
    } else {
        other.to_string()
    }
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        // Navigation
        KeyBinding::new(NavAction::Login.keystroke(), NavAction::Login, None),
        KeyBinding::new(NavAction::Seats.keystroke(), NavAction::Seats, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_keystroke() {
        let text = humanize_keystroke("secondary-1");
        if cfg!(target_os = "macos") {
            assert_eq!(text, "⌘1");
        } else {
            assert_eq!(text, "Ctrl+1");
        }

        let text = humanize_keystroke("shift-q");
        assert!(text.ends_with('Q'));
    }
}
