//! Preference order over place result types.
//!
//! Autocomplete returns several predictions with type tags; when the tool
//! has to pick one without asking (flag-driven mode), it prefers routes and
//! street addresses over named venues. The order is total: every tag the
//! service might invent ranks behind the known ones.

use crate::places::client::Prediction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PlaceKind {
    Route,
    StreetAddress,
    Restaurant,
    PointOfInterest,
    /// Fallback rank for unknown or absent tags.
    Other,
}

impl PlaceKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "route" => PlaceKind::Route,
            "street_address" => PlaceKind::StreetAddress,
            "restaurant" => PlaceKind::Restaurant,
            "point_of_interest" => PlaceKind::PointOfInterest,
            _ => PlaceKind::Other,
        }
    }

    /// Position in the preference order; lower is preferred.
    pub fn rank(self) -> u8 {
        self as u8
    }
}

/// Best kind among a prediction's tags; untagged predictions rank last.
pub fn prediction_kind(prediction: &Prediction) -> PlaceKind {
    prediction
        .types
        .iter()
        .map(|tag| PlaceKind::from_tag(tag))
        .min()
        .unwrap_or(PlaceKind::Other)
}

/// Highest-ranked prediction; ties keep the service's own order.
pub fn best_prediction(predictions: &[Prediction]) -> Option<&Prediction> {
    predictions.iter().min_by_key(|p| prediction_kind(p))
}
