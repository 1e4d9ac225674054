//! String similarity measures used by the normalizer and the classifier.
//!
//! Both components only depend on the narrow [`StringSimilarity`] trait, so
//! the matching-blocks ratio can be swapped for any other measure that
//! yields a value in `[0, 1]` plus a true edit distance.
//!
//! # Examples
//!
//! ```
//! use sitebot::spelling::similarity::{SequenceRatio, StringSimilarity};
//!
//! let measure = SequenceRatio;
//! assert!(measure.similarity("intenship", "internship") > 0.9);
//! assert_eq!(measure.edit_distance("corse", "course"), 1);
//! ```

use ahash::AHashMap;

use crate::spelling::levenshtein::levenshtein_distance;

/// A pairwise string similarity measure.
pub trait StringSimilarity: Send + Sync + std::fmt::Debug {
    /// Similarity of two strings, `1.0` for identical input and `0.0` for
    /// nothing in common.
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Number of single-character insertions, deletions or substitutions
    /// turning `a` into `b`.
    fn edit_distance(&self, a: &str, b: &str) -> usize;

    /// Get the name of this measure (for debugging).
    fn name(&self) -> &'static str;
}

/// Ratcliff/Obershelp matching-blocks ratio paired with Levenshtein distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceRatio;

impl StringSimilarity for SequenceRatio {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        sequence_ratio(a, b)
    }

    fn edit_distance(&self, a: &str, b: &str) -> usize {
        levenshtein_distance(a, b)
    }

    fn name(&self) -> &'static str {
        "sequence_ratio"
    }
}

/// Compute `2 * M / T`, where `T` is the total number of characters in both
/// strings and `M` the number of characters in their matching blocks.
///
/// Matching blocks are found by taking the longest common contiguous run
/// (the earliest one in `a` on ties) and recursing on the pieces to its left
/// and right. Two empty strings are considered identical.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched = SequenceMatcher::new(&a, &b).matched_chars();
    2.0 * matched as f64 / total as f64
}

struct SequenceMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    b2j: AHashMap<char, Vec<usize>>,
}

impl<'a> SequenceMatcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: AHashMap<char, Vec<usize>> = AHashMap::new();
        for (j, ch) in b.iter().enumerate() {
            b2j.entry(*ch).or_default().push(j);
        }
        SequenceMatcher { a, b, b2j }
    }

    /// Longest block `a[i..i+k] == b[j..j+k]` inside the given ranges.
    fn longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
        let mut j2len: AHashMap<usize, usize> = AHashMap::new();

        for i in alo..ahi {
            let mut next_j2len: AHashMap<usize, usize> = AHashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        (best_i, best_j, best_size)
    }

    /// Total size of all matching blocks.
    fn matched_chars(&self) -> usize {
        let mut matched = 0;
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            matched += k;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_identical_and_empty() {
        assert_close(sequence_ratio("python", "python"), 1.0);
        assert_close(sequence_ratio("", ""), 1.0);
        assert_close(sequence_ratio("abc", ""), 0.0);
        assert_close(sequence_ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_known_ratios() {
        // 9 matched characters over 19 total.
        assert_close(sequence_ratio("intenship", "internship"), 18.0 / 19.0);
        // "abcd" vs "bcde": one block "bcd".
        assert_close(sequence_ratio("abcd", "bcde"), 0.75);
        assert_close(sequence_ratio("data", "java"), 0.5);
        assert_close(sequence_ratio("corse", "course"), 10.0 / 11.0);
    }

    #[test]
    fn test_matching_blocks_are_not_symmetric_in_general() {
        // The longest block is chosen first, so crossing matches are lost.
        assert_close(sequence_ratio("tide", "diet"), 0.25);
        assert_close(sequence_ratio("diet", "tide"), 0.5);
    }

    #[test]
    fn test_trait_object() {
        let measure: Box<dyn StringSimilarity> = Box::new(SequenceRatio);
        assert_eq!(measure.edit_distance("pyton", "python"), 1);
        assert_eq!(measure.name(), "sequence_ratio");
        assert!(measure.similarity("brainovison", "brainovision") > 0.9);
    }
}
