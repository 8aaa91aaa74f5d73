/// Root mean squared error.
#[derive(Default, Copy, Clone)]
pub struct RmseLoss {
    loss: f64,
    n: usize,
}

impl RmseLoss {
    #[inline]
    pub fn push_sample(&mut self, prediction: f64, target: f64) {
        let residual_error = target - prediction;
        self.loss += residual_error * residual_error;
        self.n += 1;
    }

    #[must_use]
    pub fn finalise(&self) -> f64 {
        (self.loss / self.n.max(1) as f64).sqrt()
    }
}
