use crate::math::numeric::Numeric;

/// Adds up `f(t)` for every element, left to right, starting from zero.
///
/// Summation order is index order, so floating-point results are
/// reproducible for a given input. Integer totals wrap on overflow.
pub fn sum<T, V, F>(ts: &[T], mut f: F) -> V
where
    V: Numeric,
    F: FnMut(&T) -> V,
{
    ts.iter().fold(V::zero(), |total, t| total.accumulate(f(t)))
}

/// Mean of `f(t)` over the slice: [`sum`] divided by the length converted
/// with [`Numeric::from_len`].
///
/// Integer results truncate toward zero. An empty slice returns zero without
/// dividing.
///
/// # Panics
///
/// For integer `V`, panics if the converted length is zero, which only
/// happens when the length wraps in a narrow type (e.g. 256 elements as `u8`).
pub fn avg<T, V, F>(ts: &[T], f: F) -> V
where
    V: Numeric,
    F: FnMut(&T) -> V,
{
    if ts.is_empty() {
        return V::zero();
    }
    sum(ts, f) / V::from_len(ts.len())
}

/// Smallest `f(t)` over the slice, or zero when it is empty.
///
/// The first element seeds the candidate; a later value replaces it only
/// when strictly smaller.
pub fn min<T, V, F>(ts: &[T], f: F) -> V
where
    V: Numeric,
    F: FnMut(&T) -> V,
{
    extreme_by(ts, f, |candidate, value| value < candidate)
}

/// Largest `f(t)` over the slice, or zero when it is empty.
///
/// Mirror of [`min`]: replacement only on a strictly greater value.
pub fn max<T, V, F>(ts: &[T], f: F) -> V
where
    V: Numeric,
    F: FnMut(&T) -> V,
{
    extreme_by(ts, f, |candidate, value| value > candidate)
}

fn extreme_by<T, V, F, R>(ts: &[T], mut f: F, replaces: R) -> V
where
    V: Numeric,
    F: FnMut(&T) -> V,
    R: Fn(V, V) -> bool,
{
    let Some((first, rest)) = ts.split_first() else {
        return V::zero();
    };
    let seed = f(first);
    rest.iter().fold(seed, |candidate, t| {
        let value = f(t);
        if replaces(candidate, value) {
            value
        } else {
            candidate
        }
    })
}
