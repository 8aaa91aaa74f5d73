#[must_use]
#[inline]
pub fn dot(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y).fold(0.0, |dot, (xi, yi)| dot + xi * yi)
}

#[must_use]
pub fn mean(x: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = x.len().max(1) as f64;
    x.sum::<f64>() / n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_ok() {
        assert!((dot(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]) - 34.0).abs() < f64::EPSILON);
    }

    #[test]
    fn mean_ok() {
        assert!((mean([1.0, 2.0, 6.0].into_iter()) - 3.0).abs() < f64::EPSILON);
        assert_eq!(mean(std::iter::empty::<f64>()), 0.0);
    }
}
