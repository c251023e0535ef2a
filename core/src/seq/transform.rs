/// Applies `f` to every element and collects the results in input order.
///
/// The output always has the same length as `ts`; an empty slice yields an
/// empty `Vec`.
pub fn map<T, V, F>(ts: &[T], f: F) -> Vec<V>
where
    F: FnMut(&T) -> V,
{
    ts.iter().map(f).collect()
}

/// Like [`map`], but stops at the first element for which `f` returns `Err`
/// and returns that error unchanged.
pub fn try_map<T, V, E, F>(ts: &[T], f: F) -> Result<Vec<V>, E>
where
    F: FnMut(&T) -> Result<V, E>,
{
    ts.iter().map(f).collect()
}

/// Left fold: starts from `initial` and threads the accumulator through `f`
/// for each element in index order.
///
/// An empty slice returns `initial` unchanged.
pub fn reduce<T, V, F>(ts: &[T], f: F, initial: V) -> V
where
    F: FnMut(V, &T) -> V,
{
    ts.iter().fold(initial, f)
}

/// Fallible [`reduce`]; the first `Err` from `f` ends the fold.
pub fn try_reduce<T, V, E, F>(ts: &[T], f: F, initial: V) -> Result<V, E>
where
    F: FnMut(V, &T) -> Result<V, E>,
{
    ts.iter().try_fold(initial, f)
}
