//! Fuzzy name scoring for search candidates.
//!
//! Scores how well a free-text query matches a candidate's display name on
//! a 0-200 scale, built from first/last name-token comparisons so that
//! nicknames, middle names, and minor misspellings still rank well while
//! unrelated homonym fragments do not.

/// Minimum passing score; candidates at or below this are discarded.
pub(crate) const MATCH_THRESHOLD: u32 = 175;

/// Score a query against a candidate name, 0-200.
///
/// Single-token queries are compared against both the candidate's first
/// and last name token and the better match is doubled; multi-token
/// queries sum the first-token and last-token similarities.
pub(crate) fn name_match_score(query: &str, candidate: &str) -> u32 {
    let query = query.trim().to_lowercase();
    let candidate = candidate.trim().to_lowercase();

    let query_tokens: Vec<&str> = query.split_whitespace().collect();
    let candidate_tokens: Vec<&str> = candidate.split_whitespace().collect();

    let (Some(&candidate_first), Some(&candidate_last)) =
        (candidate_tokens.first(), candidate_tokens.last())
    else {
        return 0;
    };

    match query_tokens.as_slice() {
        [] => 0,
        [single] => {
            2 * partial_similarity(single, candidate_first)
                .max(partial_similarity(single, candidate_last))
        }
        [first, .., last] => {
            partial_similarity(first, candidate_first)
                + partial_similarity(last, candidate_last)
        }
    }
}

/// Partial similarity on a 0-100 scale.
///
/// Best normalized Levenshtein ratio of the shorter string against every
/// equal-length character window of the longer, so "tim" scores 100
/// against "timothy" and near-misses degrade smoothly.
fn partial_similarity(a: &str, b: &str) -> u32 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    let long_chars: Vec<char> = long.chars().collect();
    let window = short.chars().count();

    let mut best = 0.0_f64;
    for start in 0..=(long_chars.len() - window) {
        let slice: String = long_chars[start..start + window].iter().collect();
        let similarity = strsim::normalized_levenshtein(short, &slice);
        if similarity > best {
            best = similarity;
        }
        if best >= 1.0 {
            break;
        }
    }

    (best * 100.0).round() as u32
}
