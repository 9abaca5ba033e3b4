//! # Nearest-Point Search
//!
//! One search algorithm serves three lookups: the hardness requirement for a
//! queried thickness, and the two axis probes of a correction-grid lookup.
//! The scan is linear and only advances on a strictly smaller distance, so
//! equidistant ties always keep the earliest entry.

/// Absolute tolerance within which a stored thickness counts as an exact
/// match for the queried one.
pub const THICKNESS_TOLERANCE: f64 = 1e-6;

/// Index of the key closest to `target` by absolute distance.
///
/// Returns `None` for an empty sequence. Ties keep the earliest entry.
pub fn nearest_index<I>(keys: I, target: f64) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    let mut best = None;
    let mut best_dist = f64::INFINITY;
    for (index, key) in keys.into_iter().enumerate() {
        let dist = (key - target).abs();
        if dist < best_dist {
            best = Some(index);
            best_dist = dist;
        }
    }
    best
}

/// Nearest requirement in an ascending `(thickness, requirement)` series.
///
/// Entries within `tol` of `target` are preferred: the first one carrying a
/// present value wins; if every tolerance match is absent the result is
/// absent. With no tolerance match at all, the value of the globally closest
/// entry is returned (ties keep the earliest), which may itself be absent.
pub fn nearest_requirement<'a, T>(
    pairs: &'a [(f64, Option<T>)],
    target: f64,
    tol: f64,
) -> Option<&'a T> {
    let mut matched_within_tol = false;
    for (key, value) in pairs {
        if (key - target).abs() <= tol {
            if value.is_some() {
                return value.as_ref();
            }
            matched_within_tol = true;
        }
    }
    if matched_within_tol {
        return None;
    }
    nearest_index(pairs.iter().map(|(key, _)| *key), target)
        .and_then(|index| pairs[index].1.as_ref())
}
