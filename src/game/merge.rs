/// Drops empty entries, then combines each pair of equal neighbours once, scanning from the
/// front. A value produced by `combine` is never combined again in the same pass, so
/// `a, a, a` becomes `combine(a, a), a`.
///
/// The result is at most as long as `line`; callers pad the remainder with empties.
pub fn move_and_merge_equal<T, F>(line: &[Option<T>], mut combine: F) -> Vec<T>
where
    T: Clone + PartialEq,
    F: FnMut(T, T) -> T,
{
    let mut merged = Vec::with_capacity(line.len());
    let mut pending: Option<T> = None;

    for value in line.iter().flatten().cloned() {
        match pending.take() {
            Some(previous) if previous == value => merged.push(combine(previous, value)),
            Some(previous) => {
                merged.push(previous);
                pending = Some(value);
            }
            None => pending = Some(value),
        }
    }

    merged.extend(pending);
    merged
}
