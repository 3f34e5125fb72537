use ndarray::Array1;

/// Build `length` stimulus intensities starting at `initial` and increasing by `step`.
///
/// Values are accumulated by repeated addition rather than `initial + k * step`.
pub fn sequence(initial: f64, step: f64, length: usize) -> Array1<f64> {
    let mut x = Vec::with_capacity(length);
    let mut val = initial;
    for _ in 0..length {
        x.push(val);
        val += step;
    }
    Array1::from(x)
}
