//! Average gasoline price lookup.
//!
//! tankille.fi publishes average pump prices; the country page and the
//! Helsinki page each carry an `h6` element whose text starts with
//! "Keskiarvo" followed by the price in comma-decimal euros. Either page may
//! be unreachable independently, so both sides of the result are optional.
//! Fetched averages are cached on disk for eight hours.

use chrono::Duration;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::cache::CacheStore;
use crate::error::{Result, SplitError};
use crate::logging;

const FINLAND_URL: &str = "https://www.tankille.fi/suomi/";
const HELSINKI_URL: &str = "https://www.tankille.fi/helsinki/";
const AVERAGE_MARKER: &str = "Keskiarvo";
const CACHE_KEY: &str = "average_gas_price";
const CACHE_TTL_HOURS: i64 = 8;

/// Price the form falls back to when no average could be fetched, €/l.
pub const FALLBACK_GAS_PRICE: f64 = 1.9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AverageGasPrice {
    pub finland: Option<f64>,
    pub helsinki: Option<f64>,
}

impl AverageGasPrice {
    /// Default for the gas price field: country average, else Helsinki,
    /// else the fixed fallback.
    pub fn default_price(&self) -> f64 {
        self.finland.or(self.helsinki).unwrap_or(FALLBACK_GAS_PRICE)
    }

    pub fn is_empty(&self) -> bool {
        self.finland.is_none() && self.helsinki.is_none()
    }
}

/// Average-price fetcher with an optional disk cache behind it.
pub struct PriceLookup {
    http: reqwest::blocking::Client,
    cache: Option<CacheStore>,
}

impl PriceLookup {
    pub fn new() -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| SplitError::http("building HTTP client", e))?;

        // A missing cache directory degrades to fetch-every-time.
        let cache = CacheStore::new().ok();
        Ok(Self { http, cache })
    }

    /// Replace the cache, e.g. with a temp-dir store in tests.
    pub fn with_cache(mut self, cache: Option<CacheStore>) -> Self {
        self.cache = cache;
        self
    }

    /// Current averages, from cache unless expired or `refresh` is set.
    pub fn fetch(&self, refresh: bool) -> Result<AverageGasPrice> {
        if !refresh {
            if let Some(store) = &self.cache {
                if let Some(cached) =
                    store.load::<AverageGasPrice>(CACHE_KEY, Duration::hours(CACHE_TTL_HOURS))
                {
                    logging::log_cache_hit(CACHE_KEY);
                    return Ok(cached);
                }
            }
        }

        let prices = AverageGasPrice {
            finland: self.fetch_page_average(FINLAND_URL),
            helsinki: self.fetch_page_average(HELSINKI_URL),
        };

        if prices.is_empty() {
            return Err(SplitError::service(
                "tankille.fi",
                "no average price found",
            ));
        }

        if let Some(store) = &self.cache {
            if let Err(e) = store.store(CACHE_KEY, &prices) {
                tracing::debug!(error = %e, "Failed to cache average gas price");
            }
        }

        Ok(prices)
    }

    /// Averages with a soft failure mode: lookup errors become the fallback.
    pub fn fetch_or_fallback(&self) -> AverageGasPrice {
        self.fetch(false).unwrap_or(AverageGasPrice {
            finland: None,
            helsinki: None,
        })
    }

    fn fetch_page_average(&self, url: &str) -> Option<f64> {
        logging::log_http_request("GET", url, None);
        let response = self.http.get(url).send().ok()?;
        logging::log_http_request("GET", url, Some(response.status().as_u16()));

        let body = response.text().ok()?;
        parse_average_price(&body)
    }
}

/// Find the `h6` element carrying the average marker and parse its price.
pub fn parse_average_price(html: &str) -> Option<f64> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("h6").ok()?;

    for element in document.select(&selector) {
        let text = element.text().collect::<Vec<_>>().join(" ");
        if text.contains(AVERAGE_MARKER) {
            return price_from_text(&text);
        }
    }
    None
}

/// Price token out of e.g. `Keskiarvo 1,89 €/l`: the second whitespace
/// token, with the comma decimal normalized.
fn price_from_text(text: &str) -> Option<f64> {
    let token = text.split_whitespace().nth(1)?;
    token.replace(',', ".").parse().ok()
}
