use std::str::FromStr;

use crate::prelude::*;

pub fn test_size(value: &str) -> Result<f64> {
    match f64::from_str(value)? {
        value if value > 0.0 && value < 1.0 => Ok(value),
        value => Err(anyhow!("{} is not a fraction in (0, 1)", value)),
    }
}

pub fn non_negative_f32(value: &str) -> Result<f32> {
    match f32::from_str(value)? {
        value if value >= 0.0 => Ok(value),
        _ => Err(anyhow!("expected a non-negative number")),
    }
}
