use std::collections::BTreeMap;

/// Word -> occurrence count. Ordered so that distance sums are accumulated
/// in a stable order.
pub type Dictionary = BTreeMap<String, usize>;

/// Returned by [`dictionary_distance`] when either side has no words.
pub const NOT_COMPARABLE: f32 = -1.0;

/// Counts whitespace-delimited tokens across `texts`.
///
/// Texts are treated as if joined by a space, so a token never spans two
/// texts. Counting is case-sensitive and tokens are not normalized.
pub fn build_dictionary<'a, I>(texts: I) -> Dictionary
where
    I: IntoIterator<Item = &'a str>,
{
    let mut dictionary = Dictionary::new();
    for word in texts.into_iter().flat_map(str::split_whitespace) {
        *dictionary.entry(word.to_owned()).or_insert(0) += 1;
    }
    dictionary
}

/// Term-frequency similarity of `a` towards `b`.
///
/// Only words of `a` are visited, which makes the score asymmetric. The
/// denominator is the sum of both norms rather than their product, so the
/// result is not bounded by 1. Returns [`NOT_COMPARABLE`] if either
/// dictionary is empty.
pub fn dictionary_distance(a: &Dictionary, b: &Dictionary) -> f32 {
    if a.is_empty() || b.is_empty() {
        return NOT_COMPARABLE;
    }

    let mut sum_ab = 0.0_f64;
    let mut sum_a_sq = 0.0_f64;
    let mut sum_b_sq = 0.0_f64;

    for (word, &count) in a {
        let a_val = count as f64;
        let b_val = b.get(word).copied().unwrap_or(0) as f64;

        sum_ab += a_val * b_val;
        sum_a_sq += a_val * a_val;
        sum_b_sq += b_val * b_val;
    }

    if sum_a_sq == 0.0 && sum_b_sq == 0.0 {
        return NOT_COMPARABLE;
    }

    (sum_ab / (sum_a_sq.sqrt() + sum_b_sq.sqrt())) as f32
}
