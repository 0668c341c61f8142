//! Process-wide style registry.
//!
//! Elements rendered with [`Element::render`](crate::Element::render) resolve
//! their styles here. Populate it once at startup (for example from a design
//! system stylesheet via [`install`]) before rendering. Writers and readers are
//! serialized by a read/write lock, so registering styles from one thread while
//! another renders is safe but last-writer-wins.
//!
//! Code that wants isolation, such as unit tests, should keep its own
//! [`StyleRegistry`] and call [`Element::render_with`](crate::Element::render_with).

use once_cell::sync::Lazy;
use std::sync::{PoisonError, RwLock};

use super::registry::StyleRegistry;

static SHARED_STYLES: Lazy<RwLock<StyleRegistry>> =
    Lazy::new(|| RwLock::new(StyleRegistry::new()));

/// Maps `name` to `value` in the shared registry, replacing any earlier mapping.
pub fn set_style(name: impl Into<String>, value: impl Into<String>) {
    let mut guard = SHARED_STYLES.write().unwrap_or_else(PoisonError::into_inner);
    guard.set(name, value);
}

/// Resolves `expression` against the shared registry, echoing it when unmapped.
pub fn resolve_style(expression: &str) -> String {
    with_shared(|styles| styles.resolve(expression))
}

/// Runs `f` with read access to the shared registry.
///
/// Do not call [`set_style`], [`install`] or [`clear`] from inside `f`.
pub fn with_shared<R>(f: impl FnOnce(&StyleRegistry) -> R) -> R {
    let guard = SHARED_STYLES.read().unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

/// Replaces the shared registry wholesale.
pub fn install(styles: StyleRegistry) {
    tracing::debug!(styles = styles.len(), "installing shared style registry");
    let mut guard = SHARED_STYLES.write().unwrap_or_else(PoisonError::into_inner);
    *guard = styles;
}

/// Returns an owned copy of the shared registry.
pub fn snapshot() -> StyleRegistry {
    with_shared(StyleRegistry::clone)
}

/// Removes every mapping from the shared registry.
pub fn clear() {
    install(StyleRegistry::new());
}
