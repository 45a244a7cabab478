//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times,
//! for instance when a broken `.htl` file is reloaded on every request.
//! Warnings are grouped by component so one component can be reset without
//! touching the others.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Warnings already printed, keyed by component (to deduplicate)
static WARNED: Mutex<Option<HashMap<String, HashSet<String>>>> = Mutex::new(None);

/// Record `message` for `component` and report whether it is new.
fn first_occurrence(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashMap::new)
        .entry(component.to_owned())
        .or_default()
        .insert(message.to_owned())
}

/// Warn about a problem (prints once per unique message and component)
///
/// # Example
/// ```ignore
/// warn_once("static", "/index.htl: unexpected closing paren");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if first_occurrence(component, message) {
        eprintln!("{}", format!("[htl {component}] ⚠ {message}").yellow());
    }
}

/// Whether `message` has been reported for `component` since it was last cleared.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .and_then(|warned| warned.get(component))
        .is_some_and(|messages| messages.contains(message))
}

/// Forget the warnings of `component`, so the next one is printed again
/// (call when the problem it reported is gone)
pub fn clear_warnings(component: &str) {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(warned) = guard.as_mut() {
        let _ = warned.remove(component);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_are_deduplicated_until_cleared() {
        assert!(first_occurrence("test", "dedup"));
        assert!(!first_occurrence("test", "dedup"));
        assert!(first_occurrence("other", "dedup"));
        assert!(has_warned("test", "dedup"));

        clear_warnings("test");
        assert!(!has_warned("test", "dedup"));
        assert!(has_warned("other", "dedup"));
        assert!(first_occurrence("test", "dedup"));
    }

    #[test]
    fn test_clearing_unknown_component_is_noop() {
        clear_warnings("never-warned");
        assert!(!has_warned("never-warned", "anything"));
    }
}
