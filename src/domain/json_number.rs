//! Serializers for numeric columns.
//!
//! Amounts and weights are held as `f64`, but whole values go back on the
//! wire as JSON integers: `28000` stays `28000` instead of becoming
//! `28000.0`. Deserialization needs nothing special since `f64` accepts both.
//!
//! ```ignore
//! #[serde(serialize_with = "json_number::serialize")]
//! pub price: f64,
//! ```

use serde::{Serialize, Serializer};

/// Largest magnitude below which every whole `f64` is exactly an integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

struct Number(f64);

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match whole(self.0) {
            Some(n) => serializer.serialize_i64(n),
            None => serializer.serialize_f64(self.0),
        }
    }
}

fn whole(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER).then(|| value as i64)
}

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    Number(*value).serialize(serializer)
}

pub mod option {
    use serde::{Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        value.map(super::Number).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    struct Amounts {
        #[serde(serialize_with = "super::serialize")]
        price: f64,
        #[serde(serialize_with = "super::option::serialize")]
        weight: Option<f64>,
    }

    fn encoded(price: f64, weight: Option<f64>) -> serde_json::Value {
        serde_json::to_value(Amounts { price, weight }).unwrap()
    }

    #[test]
    fn whole_values_are_written_as_integers() {
        assert_eq!(encoded(28000.0, Some(4.0)), json!({ "price": 28000, "weight": 4 }));
        assert!(encoded(28000.0, None)["price"].is_i64());
        assert!(encoded(28000.0, None)["weight"].is_null());
    }

    #[test]
    fn fractional_values_stay_floats() {
        assert_eq!(encoded(31500.5, Some(4.5)), json!({ "price": 31500.5, "weight": 4.5 }));
        assert!(encoded(-0.25, None)["price"].is_f64());
        assert!(encoded(1e300, None)["price"].is_f64());
    }
}
