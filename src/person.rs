//! A module for working with the people of the network.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The attributes of a person, a vertex of the network. The person's name is the key it is stored
/// under and isn't repeated here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    discipline: String,
    /// Kept sorted so shared interests come out in a stable order.
    interests: BTreeSet<String>,
}

impl Person {
    /// Creates a new person record.
    ///
    /// # Examples
    ///
    /// ```
    /// use academe::person::Person;
    ///
    /// let person = Person::new("Ing.", ["IA", "Web"]);
    /// assert_eq!(person.discipline(), "Ing.");
    /// assert_eq!(person.interests().len(), 2);
    /// ```
    pub fn new<I, S>(discipline: impl Into<String>, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            discipline: discipline.into(),
            interests: interests.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the discipline code of the person.
    pub fn discipline(&self) -> &str {
        &self.discipline
    }

    /// Returns the interests of the person.
    pub fn interests(&self) -> &BTreeSet<String> {
        &self.interests
    }
}

/// Parses a comma-separated list of interests, trimming each entry and dropping empty ones.
///
/// # Examples
///
/// ```
/// use academe::person::parse_interests;
///
/// let interests = parse_interests(" IA, Web,, Datos ");
/// assert_eq!(interests.into_iter().collect::<Vec<_>>(), vec!["Datos", "IA", "Web"]);
/// ```
pub fn parse_interests(text: &str) -> BTreeSet<String> {
    text.split(',')
        .map(str::trim)
        .filter(|interest| !interest.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let person = Person::new("Med.", ["Biología", "Genética", "Biología"]);

        assert_eq!(person.discipline(), "Med.");
        // Duplicates collapse.
        assert_eq!(person.interests().len(), 2);
    }

    #[test]
    fn no_interests() {
        let person = Person::new("Adm.", Vec::<String>::new());
        assert!(person.interests().is_empty());
    }

    #[test]
    fn parse_empty() {
        assert!(parse_interests("").is_empty());
        assert!(parse_interests(" , ,").is_empty());
    }

    #[test]
    fn parse_dedup() {
        let interests = parse_interests("IA,IA , IA");
        assert_eq!(interests.len(), 1);
        assert!(interests.contains("IA"));
    }
}
