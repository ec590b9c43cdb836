//! A module for working with collaborations, the edges of the network.

use std::fmt;

use serde::Serialize;

/// A pair of people who collaborate. Collaborations don't have a direction, despite the
/// `source`-`target` nomenclature used.
///
/// The pair is stored canonically, the lexicographically smaller name first, so `(a, b)` and
/// `(b, a)` are the same value and hash the same way.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Collaboration {
    source: String,
    target: String,
}

impl Collaboration {
    /// Creates a new collaboration from two names.
    ///
    /// # Examples
    ///
    /// ```
    /// use academe::edge::Collaboration;
    ///
    /// let collaboration = Collaboration::new("b", "a");
    /// assert_eq!(collaboration, Collaboration::new("a", "b"));
    /// ```
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());

        if a <= b {
            Self {
                source: a,
                target: b,
            }
        } else {
            Self {
                source: b,
                target: a,
            }
        }
    }

    /// Returns the lexicographically smaller name of the pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use academe::edge::Collaboration;
    ///
    /// let collaboration = Collaboration::new("b", "a");
    /// assert_eq!(collaboration.source(), "a");
    /// ```
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the lexicographically greater name of the pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use academe::edge::Collaboration;
    ///
    /// let collaboration = Collaboration::new("b", "a");
    /// assert_eq!(collaboration.target(), "b");
    /// ```
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns whether the collaboration involves the given person.
    ///
    /// # Examples
    ///
    /// ```
    /// use academe::edge::Collaboration;
    ///
    /// let collaboration = Collaboration::new("a", "b");
    ///
    /// assert_eq!(collaboration.contains("a"), true);
    /// assert_eq!(collaboration.contains("b"), true);
    /// assert_eq!(collaboration.contains("c"), false);
    /// ```
    pub fn contains(&self, name: &str) -> bool {
        self.source == name || self.target == name
    }
}

impl fmt::Display for Collaboration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    use super::*;

    #[test]
    fn new() {
        assert_eq!(
            Collaboration::new("b", "a"),
            Collaboration {
                source: "a".into(),
                target: "b".into()
            }
        )
    }

    #[test]
    fn source() {
        let collaboration = Collaboration::new("a", "b");
        assert_eq!(collaboration.source(), "a");
    }

    #[test]
    fn target() {
        let collaboration = Collaboration::new("a", "b");
        assert_eq!(collaboration.target(), "b");
    }

    #[test]
    fn contains() {
        let collaboration = Collaboration::new("a", "b");

        assert!(collaboration.contains("a"));
        assert!(collaboration.contains("b"));
        assert!(!collaboration.contains("c"));
    }

    #[test]
    fn non_ascii_order() {
        // Byte-wise ordering places accented names after plain ASCII ones.
        let collaboration = Collaboration::new("María", "Ana");

        assert_eq!(collaboration.source(), "Ana");
        assert_eq!(collaboration.target(), "María");
    }

    #[test]
    fn display() {
        assert_eq!(Collaboration::new("b", "a").to_string(), "a -- b");
    }

    //
    // Trait implementations
    //

    #[test]
    fn partial_eq() {
        assert_eq!(Collaboration::new("a", "b"), Collaboration::new("a", "b"));
        assert_eq!(Collaboration::new("a", "b"), Collaboration::new("b", "a"));
        assert_ne!(Collaboration::new("a", "b"), Collaboration::new("a", "c"));
    }

    #[test]
    fn hash() {
        let mut h1 = DefaultHasher::new();
        let mut h2 = DefaultHasher::new();

        let k1 = Collaboration::new("a", "b");
        let k2 = Collaboration::new("b", "a");

        k1.hash(&mut h1);
        k2.hash(&mut h2);

        // Verify k1 == k2 => hash(k1) == hash(k2).
        assert_eq!(h1.finish(), h2.finish());
    }
}
