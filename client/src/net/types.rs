//! Wire DTOs for the prediction endpoint.
//!
//! DESIGN
//! ======
//! `all_predictions` arrives as a JSON object. It is decoded into an ordered
//! list instead of a map so rows render in the order the backend wrote them.
//! Keys stay unique: a duplicate overwrites the earlier row in place.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Raw body returned by `POST /predict/{detector}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub success: bool,
    pub prediction: Option<String>,
    pub confidence: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_ordered_probabilities")]
    pub all_predictions: Option<Vec<ClassProbability>>,
    pub message: Option<String>,
}

/// One row of the per-class breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassProbability {
    pub class_name: String,
    /// Percentage in `0..=100`.
    pub percentage: f64,
}

/// A successful classification ready for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionResult {
    pub prediction: String,
    /// Top-class confidence in `0..=100`.
    pub confidence: f64,
    pub all_predictions: Vec<ClassProbability>,
}

fn deserialize_ordered_probabilities<'de, D>(deserializer: D) -> Result<Option<Vec<ClassProbability>>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedProbabilities;

    impl<'de> Visitor<'de> for OrderedProbabilities {
        type Value = Option<Vec<ClassProbability>>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of class name to percentage")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_map(self)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut rows: Vec<ClassProbability> = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((class_name, percentage)) = map.next_entry::<String, f64>()? {
                // A repeated key keeps its first position and takes the last value.
                match rows.iter_mut().find(|row| row.class_name == class_name) {
                    Some(row) => row.percentage = percentage,
                    None => rows.push(ClassProbability { class_name, percentage }),
                }
            }
            Ok(Some(rows))
        }
    }

    deserializer.deserialize_option(OrderedProbabilities)
}

/// Image bytes captured from the current selection for one prediction request.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub media_type: String,
    pub bytes: std::sync::Arc<[u8]>,
}
