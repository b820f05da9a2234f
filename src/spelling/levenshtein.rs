//! Edit distance calculation for spelling correction.

use std::cmp::min;

/// Damerau-Levenshtein (OSA) distance with early termination.
///
/// Returns `None` as soon as the distance is known to exceed `threshold`.
/// Works on chars, so multi-byte scripts count one edit per letter.
#[allow(clippy::needless_range_loop)]
pub fn damerau_levenshtein_distance_threshold(
    s1: &str,
    s2: &str,
    threshold: usize,
) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    // Early termination if length difference exceeds threshold
    if len1.abs_diff(len2) > threshold {
        return None;
    }
    if len1 == 0 || len2 == 0 {
        let distance = len1.max(len2);
        return (distance <= threshold).then_some(distance);
    }

    // Three rows: two back for transpositions, previous, current
    let mut prev_prev_row = vec![0; len2 + 1];
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );

            if i > 1
                && j > 1
                && s1_chars[i - 1] == s2_chars[j - 2]
                && s1_chars[i - 2] == s2_chars[j - 1]
            {
                curr_row[j] = min(curr_row[j], prev_prev_row[j - 2] + 1); // transposition
            }

            min_in_row = min(min_in_row, curr_row[j]);
        }

        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_prev_row, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    (distance <= threshold).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transposition_counts_once() {
        assert_eq!(damerau_levenshtein_distance_threshold("ab", "ba", 3), Some(1));
        assert_eq!(damerau_levenshtein_distance_threshold("врач", "вртч", 3), Some(1));
        assert_eq!(damerau_levenshtein_distance_threshold("поавр", "повар", 3), Some(1));
        assert_eq!(damerau_levenshtein_distance_threshold("ca", "abc", 3), Some(3));
    }

    #[test]
    fn test_distance_counts_chars_not_bytes() {
        assert_eq!(
            damerau_levenshtein_distance_threshold("электрик", "электрикам", 1),
            None
        );
        assert_eq!(
            damerau_levenshtein_distance_threshold("электрик", "электрикам", 2),
            Some(2)
        );
    }

    #[test]
    fn test_threshold() {
        assert_eq!(
            damerau_levenshtein_distance_threshold("электрик", "электрик", 3),
            Some(0)
        );
        assert_eq!(
            damerau_levenshtein_distance_threshold("элетрик", "электрик", 3),
            Some(1)
        );
        assert_eq!(
            damerau_levenshtein_distance_threshold("повар", "программист", 3),
            None
        );
        assert_eq!(damerau_levenshtein_distance_threshold("abcd", "wxyz", 3), None);
        assert_eq!(damerau_levenshtein_distance_threshold("", "abc", 3), Some(3));
    }
}
