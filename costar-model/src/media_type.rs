use std::fmt::Display;
use std::fmt::Formatter;

/// Simple enum for the two media kinds a shared credit can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaKind {
    /// Theatrical or streaming film credit
    Movie,
    /// Television series credit
    Tv,
}

impl MediaKind {
    /// The TMDB URL path segment for this kind (`movie` or `tv`).
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_path_segment())
    }
}
