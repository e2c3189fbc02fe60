use std::fmt;

/// Release year of a credit, as reported by the upstream API.
///
/// Either the first four characters of a `YYYY-MM-DD` date string or the
/// literal `n.d.` sentinel when the upstream omits the date entirely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Year(String);

impl Year {
    /// Sentinel for credits with no release date.
    pub const UNKNOWN: &'static str = "n.d.";

    /// Build a year from an optional date string.
    ///
    /// Takes the first four characters of a non-empty date, otherwise the
    /// `n.d.` sentinel.
    pub fn from_date(date: Option<&str>) -> Self {
        match date.map(str::trim) {
            Some(date) if !date.is_empty() => {
                Year(date.chars().take(4).collect())
            }
            _ => Year(Self::UNKNOWN.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_known(&self) -> bool {
        self.0 != Self::UNKNOWN
    }

    /// Numeric sort key for year-descending ordering.
    ///
    /// Unknown years map to 0, placing them after every dated credit in a
    /// descending sort. The upstream sentinel would otherwise sort ahead of
    /// all digits when compared lexically.
    pub fn sort_key(&self) -> u16 {
        self.0.parse().unwrap_or(0)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
