//! Aggregates shown next to list views. All of them are total: empty
//! inputs and zero denominators yield 0.

pub fn count<T>(view: &[T]) -> usize {
    view.len()
}

pub fn sum<T>(view: &[T], field: impl Fn(&T) -> f64) -> f64 {
    view.iter().map(field).sum()
}

pub fn average<T>(view: &[T], field: impl Fn(&T) -> f64) -> f64 {
    if view.is_empty() {
        return 0.0;
    }
    sum(view, field) / view.len() as f64
}

/// `round(100 * part / whole)`, or 0 when `whole` is 0.
pub fn percentage(part: f64, whole: f64) -> u32 {
    if whole == 0.0 {
        return 0;
    }
    (100.0 * part / whole).round().max(0.0) as u32
}
