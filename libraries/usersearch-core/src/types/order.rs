/// Ordering types for search results
use crate::error::ParseError;
use std::str::FromStr;

/// Sort direction, encoded on the wire as `1`, `-1` or `0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderBy {
    /// Ascending by the order field
    Asc,
    /// Descending by the order field
    Desc,
    /// Keep dataset order
    #[default]
    AsIs,
}

impl OrderBy {
    /// Wire representation
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        match self {
            Self::Asc => 1,
            Self::Desc => -1,
            Self::AsIs => 0,
        }
    }
}

impl TryFrom<i64> for OrderBy {
    type Error = ParseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Asc),
            -1 => Ok(Self::Desc),
            0 => Ok(Self::AsIs),
            other => Err(ParseError::OrderBy(other.to_string())),
        }
    }
}

impl FromStr for OrderBy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| ParseError::OrderBy(s.to_string()))?;
        Self::try_from(value)
    }
}

impl std::fmt::Display for OrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

/// User attribute used as the sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderField {
    /// Numeric identifier
    Id,
    /// Display name, compared lexicographically
    #[default]
    Name,
    /// Age in years
    Age,
}

impl OrderField {
    /// Wire representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::Name => "Name",
            Self::Age => "Age",
        }
    }
}

impl FromStr for OrderField {
    type Err = ParseError;

    /// An empty field selects the default, `Name`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Id" => Ok(Self::Id),
            "Name" | "" => Ok(Self::Name),
            "Age" => Ok(Self::Age),
            other => Err(ParseError::OrderField(other.to_string())),
        }
    }
}

impl std::fmt::Display for OrderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
