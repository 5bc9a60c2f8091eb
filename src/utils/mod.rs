//! Utility functions for envguard

/// Check if a command exists in PATH
pub fn command_exists(command: &str) -> bool {
    !command.is_empty() && which::which(command).is_ok()
}

/// Truncate string to specified length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    }
}
