use std::fmt;
use std::str::FromStr;

use super::pokemon::MAX_SPECIES_ID;
use crate::Error;

/// What the user typed: a dex number or a species name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Query {
    Id(u32),
    /// Lower-cased, trimmed species name
    Name(String),
}

impl Query {
    /// Whether an id query falls inside the national dex. Name queries
    /// always pass; they are checked against the data source instead.
    pub fn in_range(&self) -> bool {
        match self {
            Query::Id(id) => (1..=MAX_SPECIES_ID).contains(id),
            Query::Name(_) => true,
        }
    }

    /// Path segment used by the remote API
    pub fn as_path_segment(&self) -> String {
        match self {
            Query::Id(id) => id.to_string(),
            Query::Name(name) => name.clone(),
        }
    }
}

impl FromStr for Query {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidQuery(s.to_string()));
        }

        if let Ok(id) = trimmed.parse::<u32>() {
            return Ok(Query::Id(id));
        }

        // Negative or oversized numbers are ids that can never exist
        if trimmed.parse::<i64>().is_ok() {
            return Ok(Query::Id(0));
        }

        Ok(Query::Name(trimmed.to_lowercase()))
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Id(id) => write!(f, "#{}", id),
            Query::Name(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_queries_are_ids() {
        assert_eq!("25".parse::<Query>(), Ok(Query::Id(25)));
        assert_eq!(" 007 ".parse::<Query>(), Ok(Query::Id(7)));
    }

    #[test]
    fn test_names_are_normalized() {
        assert_eq!(
            "  Pikachu ".parse::<Query>(),
            Ok(Query::Name("pikachu".to_string()))
        );
    }

    #[test]
    fn test_range_check() {
        assert!(Query::Id(1).in_range());
        assert!(Query::Id(MAX_SPECIES_ID).in_range());
        assert!(!Query::Id(0).in_range());
        assert!(!Query::Id(MAX_SPECIES_ID + 1).in_range());
        assert_eq!("-4".parse::<Query>(), Ok(Query::Id(0)));
    }

    #[test]
    fn test_empty_query_is_rejected() {
        assert!(matches!("   ".parse::<Query>(), Err(Error::InvalidQuery(_))));
    }
}
