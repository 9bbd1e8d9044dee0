//! String similarity measures used to rank index entries against a query.
//!
//! Two strategies share the [`SimilarityScorer`] contract:
//! - [`Dice`]: Sorensen-Dice coefficient over character bigrams (the default)
//! - [`Levenshtein`]: edit distance where a case-only substitution costs half
//!
//! Both return a similarity in `[0, 1]`, higher meaning more similar. Lengths
//! and bigrams are measured in Unicode scalar values.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Computes how similar a candidate name is to a query.
pub trait SimilarityScorer: Send + Sync {
    /// Similarity in `[0, 1]`.
    fn score(&self, query: &str, candidate: &str) -> f64;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Sorensen-Dice coefficient over overlapping character bigrams.
///
/// Each query bigram consumes the first unconsumed candidate bigram it
/// matches, either exactly (worth 2) or ignoring case (worth 1). A candidate
/// bigram is consumed at most once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dice;

impl SimilarityScorer for Dice {
    fn score(&self, query: &str, candidate: &str) -> f64 {
        dice(query, candidate)
    }

    fn name(&self) -> &'static str {
        "dice"
    }
}

/// Normalized edit distance with a 0.5 cost for case-only substitutions.
///
/// Similarity is `1 - distance / max(len)`. Not used by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Levenshtein;

impl SimilarityScorer for Levenshtein {
    fn score(&self, query: &str, candidate: &str) -> f64 {
        let longest = query.chars().count().max(candidate.chars().count());
        if longest == 0 {
            return 0.0;
        }
        1.0 - levenshtein(query, candidate) / longest as f64
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

type Bigram = [char; 2];

fn bigrams(text: &str) -> Vec<Bigram> {
    let chars: Vec<char> = text.chars().collect();
    chars.windows(2).map(|pair| [pair[0], pair[1]]).collect()
}

fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Sorensen-Dice similarity between `query` and `candidate`.
///
/// Returns 0 when either string is shorter than two characters.
pub fn dice(query: &str, candidate: &str) -> f64 {
    let query_bigrams = bigrams(query);
    let mut candidate_bigrams: Vec<Option<Bigram>> =
        bigrams(candidate).into_iter().map(Some).collect();

    if query_bigrams.is_empty() || candidate_bigrams.is_empty() {
        return 0.0;
    }

    let mut intersection = 0u32;
    for bigram in &query_bigrams {
        for slot in &mut candidate_bigrams {
            let Some(other) = *slot else { continue };
            if *bigram == other {
                intersection += 2;
            } else if eq_ignore_case(bigram[0], other[0]) && eq_ignore_case(bigram[1], other[1]) {
                intersection += 1;
            } else {
                continue;
            }
            *slot = None;
            break;
        }
    }

    // An exact match is worth 2 per bigram, so the coefficient
    // 2 * intersection / total peaks at 2.0; halve it into [0, 1].
    let total = (query_bigrams.len() + candidate_bigrams.len()) as f64;
    f64::from(intersection) / total
}

/// Edit distance where substituting a character by a different-case variant
/// of itself costs 0.5 instead of 1.
pub fn levenshtein(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Single rolling row of the (a.len()+1) x (b.len()+1) matrix.
    let mut row: Vec<f64> = (0..=b.len()).map(|j| j as f64).collect();
    for (i, &ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = (i + 1) as f64;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb {
                0.0
            } else if eq_ignore_case(ca, cb) {
                0.5
            } else {
                1.0
            };
            let substitution = diagonal + cost;
            let deletion = row[j + 1] + 1.0;
            let insertion = row[j] + 1.0;
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }
    row[b.len()]
}

/// Scoring strategy selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Dice,
    Levenshtein,
}

impl Strategy {
    pub fn scorer(self) -> Box<dyn SimilarityScorer> {
        match self {
            Self::Dice => Box::new(Dice),
            Self::Levenshtein => Box::new(Levenshtein),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dice" => Ok(Self::Dice),
            "levenshtein" | "edit" => Ok(Self::Levenshtein),
            other => Err(format!("unknown scoring strategy '{}'", other)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dice => f.write_str("dice"),
            Self::Levenshtein => f.write_str("levenshtein"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[rstest]
    #[case("ab")]
    #[case("Array")]
    #[case("HashMap")]
    #[case("Москва")]
    fn test_identical_strings_score_one(#[case] s: &str) {
        check!(close(dice(s, s), 1.0));
    }

    #[rstest]
    #[case("", "Array")]
    #[case("A", "Array")]
    #[case("Arr", "A")]
    #[case("Arr", "")]
    #[case("x", "x")]
    fn test_too_short_scores_zero(#[case] query: &str, #[case] candidate: &str) {
        check!(dice(query, candidate) == 0.0);
    }

    #[test]
    fn test_prefix_query() {
        // {Ar, rr} against {Ar, rr, ra, ay}: two exact matches.
        check!(close(dice("Arr", "Array"), 4.0 / 6.0));
    }

    #[test]
    fn test_case_permutation_is_half_and_symmetric() {
        check!(close(dice("AB", "ab"), 0.5));
        check!(close(dice("ab", "AB"), 0.5));
    }

    #[test]
    fn test_first_match_not_best_match() {
        // "ab" consumes the case-insensitive "AB" before reaching the exact
        // "ab" further along, so it earns 1 rather than 2.
        check!(close(dice("ab", "ABab"), 1.0 / 4.0));
        check!(close(dice("ABab", "ab"), 1.0 / 4.0));
    }

    #[test]
    fn test_candidate_bigram_consumed_once() {
        // Both "aa" query bigrams compete for the single candidate "aa".
        check!(close(dice("aaa", "aa"), 2.0 / 3.0));
    }

    #[test]
    fn test_unrelated_strings_score_zero() {
        check!(dice("Map", "Array") == 0.0);
    }

    #[test]
    fn test_score_stays_in_unit_range() {
        let samples = ["ab", "AB", "aBa", "Array", "array", "ARRAY", "rrrr", "Map"];
        for q in samples {
            for c in samples {
                let score = dice(q, c);
                check!((0.0..=1.0).contains(&score), "{} vs {} = {}", q, c, score);
            }
        }
    }

    #[rstest]
    #[case("", "", 0.0)]
    #[case("abc", "", 3.0)]
    #[case("", "abc", 3.0)]
    #[case("kitten", "sitting", 3.0)]
    #[case("Map", "map", 0.5)]
    #[case("MAP", "map", 1.5)]
    #[case("HashMap", "hashmap", 1.0)]
    fn test_levenshtein_distance(#[case] a: &str, #[case] b: &str, #[case] expected: f64) {
        check!(close(levenshtein(a, b), expected));
    }

    #[test]
    fn test_levenshtein_scorer() {
        let scorer = Levenshtein;
        check!(close(scorer.score("Vec", "Vec"), 1.0));
        check!(close(scorer.score("vec", "Vec"), 1.0 - 0.5 / 3.0));
        check!(scorer.score("", "") == 0.0);
        check!(scorer.score("abc", "xyz") == 0.0);
    }

    #[rstest]
    #[case("dice", Strategy::Dice)]
    #[case(" Levenshtein ", Strategy::Levenshtein)]
    #[case("edit", Strategy::Levenshtein)]
    fn test_strategy_from_str(#[case] raw: &str, #[case] expected: Strategy) {
        check!(raw.parse::<Strategy>() == Ok(expected));
    }

    #[test]
    fn test_strategy_scorer_names() {
        check!(Strategy::Dice.scorer().name() == "dice");
        check!(Strategy::Levenshtein.scorer().name() == "levenshtein");
        check!("cosine".parse::<Strategy>().is_err());
    }
}
