//! Place search and driving distance resolution.

pub mod client;
pub mod ranking;

pub use client::{
    DistanceOutcome, LatLng, NearbyPlace, PlacesClient, Prediction, RouteLeg, API_KEY_VAR,
};
pub use ranking::{best_prediction, PlaceKind};
