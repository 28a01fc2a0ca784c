//! Node labels backed by a global string interner.
//!
//! Labels are only used to name nodes in log records and test fixtures; node
//! identity is always the arena index ([`crate::model::NodeId`]), never the
//! label.

use std::{
    fmt,
    sync::{Mutex, OnceLock, PoisonError},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Runs `f` with exclusive access to the interner.
///
/// A poisoned lock still holds a consistent interner (interning never leaves
/// it half-updated), so poisoning is ignored.
fn with_interner<R>(f: impl FnOnce(&mut DefaultStringInterner) -> R) -> R {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut interner)
}

/// A cheap, copyable node label.
///
/// # Examples
///
/// ```
/// use umlgate_core::label::Label;
///
/// let label = Label::new("Customer");
/// assert_eq!(label, "Customer");
/// assert_eq!(label.to_string(), "Customer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label(DefaultSymbol);

impl Label {
    /// Interns `name` and returns its label.
    pub fn new(name: &str) -> Self {
        Self(with_interner(|interner| interner.get_or_intern(name)))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = with_interner(|interner| interner.resolve(self.0).map(str::to_owned));
        f.write_str(name.as_deref().unwrap_or_default())
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        with_interner(|interner| interner.resolve(self.0) == Some(other))
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_interns_same_symbol() {
        let first = Label::new("Order");
        let second = Label::new("Order");
        let other = Label::new("Invoice");

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_display() {
        let label = Label::new(":Customer");
        assert_eq!(format!("{label}"), ":Customer");
    }

    #[test]
    fn test_compare_with_str() {
        let label: Label = "Idle".into();
        assert!(label == "Idle");
        assert!(label != "Running");
    }
}
