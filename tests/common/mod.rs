//! Shared fixtures for the integration tests.

use gassplit::places::Prediction;

/// Autocomplete predictions as the places service returns them, mixed tags.
pub const PREDICTIONS_FIXTURE: &str = r#"[
    {
        "description": "Ravintola Savoy, Eteläesplanadi, Helsinki",
        "place_id": "savoy",
        "types": ["restaurant", "point_of_interest"]
    },
    {
        "description": "Mannerheimintie, Helsinki",
        "place_id": "mannerheimintie",
        "types": ["route"]
    },
    {
        "description": "Eteläesplanadi 14, Helsinki",
        "place_id": "etela-14",
        "types": ["street_address"]
    },
    {
        "description": "Esplanadin puisto, Helsinki",
        "place_id": "esplanadi-park"
    }
]"#;

pub fn predictions() -> Vec<Prediction> {
    serde_json::from_str(PREDICTIONS_FIXTURE).expect("fixture should deserialize")
}

/// Cut-down tankille.fi page with an average-price heading.
pub const PRICE_PAGE_FIXTURE: &str = r#"
<html>
  <body>
    <main>
      <h5>Bensiini 95</h5>
      <h6>Halvin 1,79 €/l</h6>
      <h6>
        Keskiarvo
        1,89
        €/l
      </h6>
    </main>
  </body>
</html>
"#;

/// Page variant without the average heading.
pub const PRICE_PAGE_WITHOUT_AVERAGE: &str = r#"
<html><body><p>Keskiarvo 1,89 €/l</p></body></html>
"#;
