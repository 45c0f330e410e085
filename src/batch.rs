use std::fmt::Display;

/// Bind every item, keeping the successes. A failure is logged and skipped so one
/// misconfigured element never prevents the others from binding.
pub fn bind_each<I, T, E, F>(items: I, mut bind: F) -> Vec<T>
where
    I: IntoIterator,
    E: Display,
    F: FnMut(I::Item) -> Result<T, E>,
{
    let mut bound = Vec::new();
    for (i, item) in items.into_iter().enumerate() {
        match bind(item) {
            Ok(v) => bound.push(v),
            Err(e) => log::warn!("[parallax] skipping element #{}: {:#}", i, e),
        }
    }
    bound
}
