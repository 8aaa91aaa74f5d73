use std::str::FromStr;

use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

/// Deserializes an optional number which is either a JSON number or a submitted form field.
/// An empty or blank field means that the value is absent.
pub fn deserialize_optional_f64<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<f64>, D::Error> {
    let value = match Option::<NumberOrString>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(NumberOrString::Number(value)) => value,
        Some(NumberOrString::String(value)) if value.trim().is_empty() => return Ok(None),
        Some(NumberOrString::String(value)) => {
            f64::from_str(value.trim()).map_err(D::Error::custom)?
        }
    };
    if value.is_finite() {
        Ok(Some(value))
    } else {
        Err(D::Error::custom(format!("{} is not a finite number", value)))
    }
}
