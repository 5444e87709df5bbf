//! Outcome labels for die faces.

use serde::{Deserialize, Serialize};

/// A single face symbol on a die.
///
/// Faces are either numeric or textual. All faces of one die must be of the
/// same kind; [`Die::new`](crate::Die::new) rejects mixed lists. The derived
/// ordering (numeric by value, text lexicographic) gives combination keys
/// and tally columns a deterministic order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Face {
    /// A numeric face symbol, e.g. the pips 1-6 on a d6.
    Num(i64),
    /// A textual face symbol, e.g. "H" and "T" on a coin.
    Text(String),
}

impl Face {
    /// Returns true if both faces are of the same kind (numeric or textual).
    pub fn same_kind(&self, other: &Face) -> bool {
        matches!(
            (self, other),
            (Face::Num(_), Face::Num(_)) | (Face::Text(_), Face::Text(_))
        )
    }
}

impl From<i64> for Face {
    fn from(value: i64) -> Self {
        Face::Num(value)
    }
}

impl From<&str> for Face {
    fn from(value: &str) -> Self {
        Face::Text(value.to_string())
    }
}

impl From<String> for Face {
    fn from(value: String) -> Self {
        Face::Text(value)
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Num(n) => write!(f, "{n}"),
            Face::Text(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_kind() {
        assert!(Face::Num(1).same_kind(&Face::Num(6)));
        assert!(Face::from("H").same_kind(&Face::from("T")));
        assert!(!Face::Num(1).same_kind(&Face::from("1")));
    }

    #[test]
    fn display() {
        assert_eq!(Face::Num(3).to_string(), "3");
        assert_eq!(Face::from("H").to_string(), "H");
    }

    #[test]
    fn ordering_within_kind() {
        assert!(Face::Num(1) < Face::Num(2));
        assert!(Face::from("H") < Face::from("T"));
    }

    #[test]
    fn serializes_untagged() {
        assert_eq!(serde_json::to_string(&Face::Num(4)).unwrap(), "4");
        assert_eq!(serde_json::to_string(&Face::from("H")).unwrap(), "\"H\"");

        let num: Face = serde_json::from_str("4").unwrap();
        assert_eq!(num, Face::Num(4));
        let text: Face = serde_json::from_str("\"H\"").unwrap();
        assert_eq!(text, Face::from("H"));
    }
}
