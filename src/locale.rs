//! Locale negotiation and localized message dictionaries.
//!
//! The tool ships Finnish and English dictionaries. `en-FI` and `en-US`
//! resolve to the English dictionary; everything unknown falls back to
//! Finnish, which is the default locale.

use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Finnish,
    English,
}

impl Locale {
    /// Parse a locale tag such as `fi`, `en`, `en-FI` or `en-US`.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "fi" => Some(Locale::Finnish),
            "en" | "en-FI" | "en-US" => Some(Locale::English),
            _ => None,
        }
    }

    /// Pick a locale: an explicit tag wins, then `LC_ALL`/`LANG`, then Finnish.
    pub fn negotiate(explicit: Option<&str>) -> Self {
        if let Some(tag) = explicit {
            if let Some(locale) = Locale::parse(tag) {
                return locale;
            }
        }

        for var in ["LC_ALL", "LANG"] {
            if let Ok(value) = env::var(var) {
                if let Some(locale) = Locale::from_env_tag(&value) {
                    return locale;
                }
            }
        }

        Locale::Finnish
    }

    /// Map an environment tag like `fi_FI.UTF-8` or `en_US` to a locale.
    fn from_env_tag(value: &str) -> Option<Self> {
        let language = value
            .split(['.', '@'])
            .next()
            .unwrap_or(value)
            .replace('_', "-");
        Locale::parse(&language).or_else(|| Locale::parse(language.split('-').next()?))
    }

    /// Tag sent to the places service as the `language` parameter.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Finnish => "fi",
            Locale::English => "en",
        }
    }

    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::Finnish => &FI,
            Locale::English => &EN,
        }
    }
}

/// Every user-facing string for one locale.
///
/// Passed explicitly to the validator and the form instead of living in
/// process-wide state, so two calls with different locales never interfere.
#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    pub trip: &'static str,
    pub car: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub distance: &'static str,
    pub consumption: &'static str,
    pub person_amount: &'static str,
    pub gas_price: &'static str,
    pub calculation_title: &'static str,
    pub person: &'static str,
    pub persons: &'static str,
    pub total: &'static str,
    pub trip_length: &'static str,
    pub source: &'static str,
    pub finland_avg: &'static str,
    pub helsinki_avg: &'static str,
    pub select_place: &'static str,
    pub none_of_these: &'static str,
    pub no_distance_found: &'static str,
    pub no_distance_found_message: &'static str,
    pub not_a_number: &'static str,
    pub below_minimum: &'static str,
    pub missing_selection: &'static str,
}

impl Messages {
    /// Render the below-minimum template, interpolating the `{min}` placeholder.
    pub fn below_minimum_message(&self, min: f64) -> String {
        self.below_minimum.replace("{min}", &format!("{min}"))
    }
}

pub static FI: Messages = Messages {
    title: "Bensakulujen jakaja",
    trip: "Matka",
    car: "Auto",
    from: "Mistä",
    to: "Minne",
    distance: "Matkan pituus (km)",
    consumption: "Kulutus (l/100km)",
    person_amount: "Henkilömäärä",
    gas_price: "Bensan hinta (€/l)",
    calculation_title: "Matkan kustannukset",
    person: "Henkilö",
    persons: "Henkilöä",
    total: "Yhteensä",
    trip_length: "Matkan pituus",
    source: "Lähde",
    finland_avg: "Suomen keskiarvo",
    helsinki_avg: "Helsingin keskiarvo",
    select_place: "Valitse paikka",
    none_of_these: "Ei mikään näistä",
    no_distance_found: "Reittiä ei löytynyt",
    no_distance_found_message:
        "Valittujen paikkojen välille ei löytynyt ajoreittiä. Syötä matkan pituus itse.",
    not_a_number: "Täytyy olla numero",
    below_minimum: "Arvon täytyy olla numero ja vähintään {min}",
    missing_selection: "Valitse paikka ehdotuksista",
};

pub static EN: Messages = Messages {
    title: "Gas cost splitter",
    trip: "Trip",
    car: "Car",
    from: "From",
    to: "To",
    distance: "Distance (km)",
    consumption: "Consumption (l/100km)",
    person_amount: "Number of people",
    gas_price: "Gas price (€/l)",
    calculation_title: "Trip cost",
    person: "Person",
    persons: "Persons",
    total: "Total",
    trip_length: "Trip length",
    source: "Source",
    finland_avg: "Finland average",
    helsinki_avg: "Helsinki average",
    select_place: "Select a place",
    none_of_these: "None of these",
    no_distance_found: "No route found",
    no_distance_found_message:
        "No driving route was found between the selected places. Enter the distance manually.",
    not_a_number: "Must be a number",
    below_minimum: "Must be a number and at least {min}",
    missing_selection: "Select a place from the suggestions",
};
