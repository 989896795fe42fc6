//! Live-vs-fallback result union.
//!
//! External lookups in this system never fail outright: on any upstream
//! problem they substitute a documented fallback value and carry on. This
//! type keeps that behaviour while letting callers distinguish the two
//! paths, instead of the untyped "Unknown" sentinel convention alone.

/// A value that is either live upstream data or a local fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sourced<T> {
    /// Data obtained from the upstream source.
    Live(T),
    /// Locally substituted data, with the upstream failure that caused it.
    Fallback {
        /// The substitute value. Fully usable; the rest of the system
        /// behaves identically on either path.
        value: T,
        /// Human-readable description of the upstream failure.
        reason: String,
    },
}

impl<T> Sourced<T> {
    /// Borrows the carried value regardless of path.
    pub fn value(&self) -> &T {
        match self {
            Sourced::Live(value) => value,
            Sourced::Fallback { value, .. } => value,
        }
    }

    /// Unwraps the carried value regardless of path.
    pub fn into_value(self) -> T {
        match self {
            Sourced::Live(value) => value,
            Sourced::Fallback { value, .. } => value,
        }
    }

    /// True when this value came from the fallback path.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Sourced::Fallback { .. })
    }

    /// The fallback reason, when on the fallback path.
    pub fn fallback_reason(&self) -> Option<&str> {
        match self {
            Sourced::Live(_) => None,
            Sourced::Fallback { reason, .. } => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_paths_expose_the_value() {
        let live = Sourced::Live(10);
        let fallback = Sourced::Fallback {
            value: 20,
            reason: "timeout".to_string(),
        };

        assert_eq!(*live.value(), 10);
        assert_eq!(fallback.into_value(), 20);
    }

    #[test]
    fn fallback_path_is_distinguishable() {
        let fallback: Sourced<i32> = Sourced::Fallback {
            value: 0,
            reason: "HTTP 503".to_string(),
        };
        assert!(fallback.is_fallback());
        assert_eq!(fallback.fallback_reason(), Some("HTTP 503"));
        assert!(!Sourced::Live(0).is_fallback());
    }
}
