/// Track identifier and rating value types
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

/// Track identifier (`TrackID` attribute)
///
/// Opaque; only ever compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a new track ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Borrow<str> for TrackId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// How two ratings are ordered when picking the surviving take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingOrder {
    /// Byte-wise string comparison (`"9"` ranks above `"10"`)
    #[default]
    Lexicographic,

    /// Ratings parsed as unsigned integers; unparsable ratings rank lowest
    Numeric,
}

/// Track rating (`Rating` attribute), kept as the raw string
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(String);

impl Rating {
    /// Create a new rating
    pub fn new(rating: impl Into<String>) -> Self {
        Self(rating.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare two ratings under the given order
    pub fn compare(&self, other: &Self, order: RatingOrder) -> Ordering {
        match order {
            RatingOrder::Lexicographic => self.0.cmp(&other.0),
            RatingOrder::Numeric => {
                match (self.0.trim().parse::<u32>(), other.0.trim().parse::<u32>()) {
                    (Ok(a), Ok(b)) => a.cmp(&b),
                    (Ok(_), Err(_)) => Ordering::Greater,
                    (Err(_), Ok(_)) => Ordering::Less,
                    (Err(_), Err(_)) => self.0.cmp(&other.0),
                }
            }
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Rating {
    fn from(rating: &str) -> Self {
        Self::new(rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicographic_order() {
        let nine = Rating::new("9");
        let ten = Rating::new("10");
        assert_eq!(nine.compare(&ten, RatingOrder::Lexicographic), Ordering::Greater);
        assert_eq!(
            Rating::new("255").compare(&Rating::new("128"), RatingOrder::Lexicographic),
            Ordering::Greater
        );
    }

    #[test]
    fn test_lexicographic_is_case_sensitive() {
        assert_eq!(
            Rating::new("a").compare(&Rating::new("B"), RatingOrder::Lexicographic),
            Ordering::Greater
        );
    }

    #[test]
    fn test_numeric_order() {
        let nine = Rating::new("9");
        let ten = Rating::new("10");
        assert_eq!(nine.compare(&ten, RatingOrder::Numeric), Ordering::Less);
    }

    #[test]
    fn test_numeric_unparsable_ranks_lowest() {
        let empty = Rating::default();
        assert_eq!(empty.compare(&Rating::new("0"), RatingOrder::Numeric), Ordering::Less);
        assert_eq!(
            Rating::new("x").compare(&Rating::new("y"), RatingOrder::Numeric),
            Ordering::Less
        );
    }

    #[test]
    fn test_default_order_is_lexicographic() {
        assert_eq!(RatingOrder::default(), RatingOrder::Lexicographic);
    }

    #[test]
    fn test_track_id_display() {
        assert_eq!(TrackId::new("17").to_string(), "17");
        assert_eq!(TrackId::from("17").as_str(), "17");
    }
}
