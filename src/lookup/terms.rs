//! Lookup terms as supplied by the calling template.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The path expression handed to a lookup.
///
/// Templates pass either a single string or a list of strings. Which shapes a
/// plugin accepts is part of its resolver's contract; see
/// [`DwimResolver`](super::DwimResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Terms {
    /// A single path expression
    Single(String),
    /// A list of path expressions
    List(Vec<String>),
}

impl Terms {
    /// Number of path expressions carried
    pub fn len(&self) -> usize {
        match self {
            Terms::Single(_) => 1,
            Terms::List(items) => items.len(),
        }
    }

    /// True for an empty list
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the individual path expressions
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let items: &[String] = match self {
            Terms::Single(s) => std::slice::from_ref(s),
            Terms::List(items) => items,
        };
        items.iter().map(String::as_str)
    }
}

impl fmt::Display for Terms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terms::Single(s) => f.write_str(s),
            Terms::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl From<&str> for Terms {
    fn from(s: &str) -> Self {
        Terms::Single(s.to_string())
    }
}

impl From<String> for Terms {
    fn from(s: String) -> Self {
        Terms::Single(s)
    }
}

impl From<Vec<String>> for Terms {
    fn from(items: Vec<String>) -> Self {
        Terms::List(items)
    }
}

impl From<&[&str]> for Terms {
    fn from(items: &[&str]) -> Self {
        Terms::List(items.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_untagged() {
        let single: Terms = serde_json::from_str(r#""hosts""#).unwrap();
        assert_eq!(single, Terms::Single("hosts".into()));

        let list: Terms = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(list, Terms::List(vec!["a".into(), "b".into()]));
    }

    #[test]
    fn test_len_and_iter() {
        let single = Terms::from("motd");
        assert_eq!(single.len(), 1);
        assert_eq!(single.iter().collect::<Vec<_>>(), vec!["motd"]);

        let empty = Terms::List(vec![]);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Terms::from("a.txt").to_string(), "a.txt");
        assert_eq!(
            Terms::from(&["a", "b"][..]).to_string(),
            "[a, b]"
        );
    }
}
