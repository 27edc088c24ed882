/// Returns the statistical moment of `values` at `moment` in `[0, 1]`.
///
/// Values are sorted and the result is linearly interpolated at position
/// `(n - 1) * moment`, so `0.5` is the median (averaging the two middle
/// values for even counts). An empty input yields `0.0`.
pub fn stat_moment(values: &[f64], moment: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let pos = (sorted.len() - 1) as f64 * moment.clamp(0.0, 1.0);
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;

    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

pub fn median(values: &[f64]) -> f64 {
    stat_moment(values, 0.5)
}
