//! Display policy: the one place view state becomes user-visible text.
//!
//! Failures render the same generic label a fresh deployment shows; the
//! failure kind is never observable here.

use crate::counter::CounterState;

const PEOPLE_ICON: &str = "👥";

/// Maps a view state to the rendered counter label.
pub fn label(state: &CounterState) -> String {
    match state {
        CounterState::Idle => String::new(),
        CounterState::Loading => "Loading visitor count...".to_string(),
        CounterState::Success { count } => {
            format!("{PEOPLE_ICON} Visitor #{}", group_thousands(*count))
        }
        CounterState::Error => format!("{PEOPLE_ICON} Visitors"),
    }
}

/// Formats `value` with comma thousands grouping.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
