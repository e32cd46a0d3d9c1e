/// `count` evenly spaced values from `start` to `end`, both included.
///
/// The last value is exactly `end`, intermediate values are `start + i * step`.
///
/// # Examples
///
/// ```
/// # use stellar_core::linspace;
/// let values = linspace(1.0, 2.0, 5);
/// assert_eq!(values, vec![1.0, 1.25, 1.5, 1.75, 2.0]);
/// assert_eq!(linspace(3.0, 4.0, 1), vec![3.0]);
/// assert!(linspace(3.0, 4.0, 0).is_empty());
/// ```
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            values[count - 1] = end;
            values
        }
    }
}
