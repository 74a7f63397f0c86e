//! Top-N rankings over tabular records.

/// Returns the `n` records with the largest rank value.
///
/// Stable: records with equal ranks keep their source order, so the same
/// snapshot always ranks the same way.
pub fn top_n<T, F>(rows: &[T], n: usize, rank: F) -> Vec<&T>
where
    F: Fn(&T) -> u64,
{
    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&a, &b| rank(&rows[b]).cmp(&rank(&rows[a])));
    order.into_iter().take(n).map(|i| &rows[i]).collect()
}
