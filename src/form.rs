//! The trip form: collects the four inputs, resolves places, and prints
//! the localized cost breakdown.
//!
//! Every field can be prefilled from a command-line flag; whatever is
//! missing is prompted for interactively. Fully prefilled numeric runs
//! never touch the network.

use colored::Colorize;
use dialoguer::{Input, Select};
use indicatif::ProgressBar;
use std::time::Duration;

use crate::cost::{round_to, split_cost, TripCostRequest, TripCostResult};
use crate::error::{Result, SplitError};
use crate::locale::{Locale, Messages};
use crate::logging;
use crate::places::{best_prediction, DistanceOutcome, LatLng, PlacesClient, Prediction};
use crate::price::PriceLookup;
use crate::validate::{Field, Validator, DEFAULT_MIN, MAX_PERSON_CHOICES};

/// Raw flag values for the `split` command. Numbers stay textual so the
/// command line accepts the same comma or dot decimals as the prompts.
#[derive(Debug, Default, Clone)]
pub struct SplitArgs {
    pub from: Option<String>,
    pub to: Option<String>,
    pub distance: Option<String>,
    pub consumption: Option<String>,
    pub price: Option<String>,
    pub persons: Option<String>,
}

/// Default consumption offered by the form, l/100km.
const DEFAULT_CONSUMPTION: f64 = 7.1;

/// A location field after its prompt round.
enum LocationInput {
    /// The user picked a suggestion; the field maps to a concrete place.
    Resolved(Prediction),
    /// Text was typed but never matched to a place.
    Unresolved,
    Empty,
}

pub struct TripForm {
    messages: &'static Messages,
    places: Option<PlacesClient>,
    near: Option<LatLng>,
}

impl TripForm {
    pub fn new(locale: Locale, places: Option<PlacesClient>, near: Option<LatLng>) -> Self {
        Self {
            messages: locale.messages(),
            places,
            near,
        }
    }

    /// Run the form and print the breakdown.
    pub fn run(&self, args: &SplitArgs) -> Result<TripCostResult> {
        let validator = Validator::new(self.messages);

        let trip_length_km = self.resolve_distance(args, &validator)?;
        let consumption_rate = self.resolve_consumption(args, &validator)?;
        let fuel_price_unit = self.resolve_price(args, &validator)?;
        let passenger_count = self.resolve_persons(args, &validator)?;

        let result = split_cost(TripCostRequest {
            trip_length_km,
            fuel_price_unit,
            consumption_rate,
            passenger_count,
        });
        logging::log_calculation(trip_length_km, passenger_count, result.total_cost);

        self.print_result(&result);
        Ok(result)
    }

    /// Distance in km: manual flag first, then resolved places, then prompts.
    fn resolve_distance(&self, args: &SplitArgs, validator: &Validator) -> Result<f64> {
        if let Some(raw) = &args.distance {
            return Ok(validator.coerce_min(Field::Distance, raw, DEFAULT_MIN)?);
        }

        if let (Some(from), Some(to)) = (&args.from, &args.to) {
            let from = self.resolve_query(Field::From, from, validator)?;
            let to = self.resolve_query(Field::To, to, validator)?;
            return match self.fetch_distance(&from, &to)? {
                DistanceOutcome::Route(leg) => {
                    self.print_distance_note(&leg.distance_text);
                    Ok(round_to(leg.distance_km(), 2))
                }
                DistanceOutcome::NoRoute => {
                    Err(SplitError::no_route(from.description, to.description))
                }
            };
        }

        println!("\n{}", self.messages.trip.blue().bold());
        let from = self.prompt_location(Field::From)?;
        let to = self.prompt_location(Field::To)?;

        if let (LocationInput::Resolved(from), LocationInput::Resolved(to)) = (&from, &to) {
            match self.fetch_distance(from, to)? {
                DistanceOutcome::Route(leg) => {
                    self.print_distance_note(&leg.distance_text);
                    return Ok(round_to(leg.distance_km(), 2));
                }
                DistanceOutcome::NoRoute => {
                    println!(
                        "{} {}",
                        "⚠".yellow(),
                        self.messages.no_distance_found.yellow().bold()
                    );
                    println!("  {}", self.messages.no_distance_found_message);
                }
            }
        }

        self.prompt_decimal(Field::Distance, validator, None)
    }

    fn resolve_consumption(&self, args: &SplitArgs, validator: &Validator) -> Result<f64> {
        match &args.consumption {
            Some(raw) => Ok(validator.coerce_min(Field::Consumption, raw, DEFAULT_MIN)?),
            None => {
                println!("\n{}", self.messages.car.blue().bold());
                self.prompt_decimal(
                    Field::Consumption,
                    validator,
                    Some(format!("{DEFAULT_CONSUMPTION}")),
                )
            }
        }
    }

    fn resolve_price(&self, args: &SplitArgs, validator: &Validator) -> Result<f64> {
        if let Some(raw) = &args.price {
            return Ok(validator.coerce_min(Field::GasPrice, raw, DEFAULT_MIN)?);
        }

        // Seed the prompt with the live average, like the web form did.
        let averages = match PriceLookup::new() {
            Ok(lookup) => {
                let spinner = self.spinner(self.messages.gas_price);
                let averages = lookup.fetch_or_fallback();
                spinner.finish_and_clear();
                averages
            }
            Err(_) => crate::price::AverageGasPrice {
                finland: None,
                helsinki: None,
            },
        };

        let default = format!("{:.2}", averages.default_price());
        let value = self.prompt_decimal(Field::GasPrice, validator, Some(default))?;
        if !averages.is_empty() {
            println!(
                "  {}",
                format!("({}: tankille.fi)", self.messages.source).dimmed()
            );
        }
        Ok(value)
    }

    fn resolve_persons(&self, args: &SplitArgs, validator: &Validator) -> Result<u32> {
        if let Some(raw) = &args.persons {
            return Ok(validator.person_count(raw)?);
        }

        let choices: Vec<String> = (1..=MAX_PERSON_CHOICES).map(|n| n.to_string()).collect();
        let selection = Select::new()
            .with_prompt(self.messages.person_amount)
            .items(&choices)
            .default(0)
            .interact()?;
        Ok(selection as u32 + 1)
    }

    /// Prompt one location field; non-empty input fetches suggestions and
    /// the user picks one, or declines them all and stays unresolved.
    fn prompt_location(&self, field: Field) -> Result<LocationInput> {
        let input: String = Input::new()
            .with_prompt(field.label(self.messages))
            .allow_empty(true)
            .interact_text()?;

        if input.is_empty() {
            return Ok(LocationInput::Empty);
        }
        let Some(client) = &self.places else {
            return Ok(LocationInput::Unresolved);
        };

        let spinner = self.spinner(field.label(self.messages));
        let predictions = client.autocomplete(&input, self.near);
        spinner.finish_and_clear();

        let predictions = match predictions {
            Ok(predictions) => predictions,
            Err(e) => {
                eprintln!("{} {}", "⚠".yellow(), e);
                return Ok(LocationInput::Unresolved);
            }
        };
        if predictions.is_empty() {
            return Ok(LocationInput::Unresolved);
        }

        let mut items: Vec<&str> = predictions.iter().map(|p| p.description.as_str()).collect();
        items.push(self.messages.none_of_these);

        let choice = Select::new()
            .with_prompt(self.messages.select_place)
            .items(&items)
            .default(0)
            .interact()?;

        if choice < predictions.len() {
            Ok(LocationInput::Resolved(predictions[choice].clone()))
        } else {
            Ok(LocationInput::Unresolved)
        }
    }

    /// Flag mode has nobody to ask: take the best-ranked prediction, and
    /// treat an unmatchable query as a missing selection.
    fn resolve_query(
        &self,
        field: Field,
        query: &str,
        validator: &Validator,
    ) -> Result<Prediction> {
        let client = self
            .places
            .as_ref()
            .ok_or_else(|| SplitError::missing_api_key(crate::places::API_KEY_VAR))?;

        let predictions = client.autocomplete(query, self.near)?;
        best_prediction(&predictions)
            .cloned()
            .ok_or_else(|| validator.missing_selection(field).into())
    }

    fn fetch_distance(&self, from: &Prediction, to: &Prediction) -> Result<DistanceOutcome> {
        let client = self
            .places
            .as_ref()
            .ok_or_else(|| SplitError::missing_api_key(crate::places::API_KEY_VAR))?;

        let spinner = self.spinner(self.messages.distance);
        let outcome = client.distance(&from.place_id, &to.place_id);
        spinner.finish_and_clear();
        outcome
    }

    fn prompt_decimal(
        &self,
        field: Field,
        validator: &Validator,
        default: Option<String>,
    ) -> Result<f64> {
        let mut input = Input::<String>::new().with_prompt(field.label(self.messages));
        if let Some(default) = default {
            input = input.default(default);
        }

        let raw = input
            .validate_with(|value: &String| {
                validator
                    .coerce_min(field, value, DEFAULT_MIN)
                    .map(|_| ())
                    .map_err(|e| e.message().to_string())
            })
            .interact_text()?;

        Ok(validator.coerce_min(field, &raw, DEFAULT_MIN)?)
    }

    fn print_distance_note(&self, distance_text: &str) {
        println!(
            "{} {}: {} {}",
            "✓".green(),
            self.messages.distance,
            distance_text,
            format!("({}: Google Maps)", self.messages.source).dimmed()
        );
    }

    fn spinner(&self, message: &str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(120));
        spinner
    }

    /// Localized breakdown, mirroring the result dialog of the web form.
    fn print_result(&self, result: &TripCostResult) {
        let messages = self.messages;
        let details = &result.details;

        println!("\n{}", messages.calculation_title.blue().bold());
        println!(
            "{}: {}",
            messages.person,
            format!("{:.2} €", result.cost_per_person).green().bold()
        );
        println!("{}: {:.2} €", messages.total, result.total_cost);

        println!("{}", "─".repeat(32).dimmed());
        println!(
            "{}: {:.2} km",
            messages.trip_length, details.trip_length_km
        );
        // The consumption and price labels already carry their units.
        println!("{}: {}", messages.consumption, details.consumption_rate);
        println!("{}: {}", messages.gas_price, details.fuel_price_unit);

        let person_label = if details.passenger_count == 1 {
            messages.person
        } else {
            messages.persons
        };
        println!(
            "{}: {} {}",
            messages.person_amount,
            details.passenger_count,
            person_label.to_lowercase()
        );
    }
}
