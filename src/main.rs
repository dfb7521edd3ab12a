use clap::{Parser, Subcommand};
use colored::*;
use std::process;

use gassplit::cache::CacheStore;
use gassplit::error::{Result, SplitError};
use gassplit::form::{SplitArgs, TripForm};
use gassplit::locale::Locale;
use gassplit::logging;
use gassplit::places::{best_prediction, DistanceOutcome, LatLng, PlacesClient, Prediction};
use gassplit::price::PriceLookup;
use gassplit::validate::{Field, Validator};

#[derive(Parser)]
#[command(name = "gassplit")]
#[command(version = "0.1.0")]
#[command(about = "Split the gas cost of a shared car trip", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, help = "Enable verbose output", global = true)]
    verbose: bool,

    #[arg(
        short,
        long,
        help = "Output locale (fi, en, en-FI, en-US)",
        global = true
    )]
    locale: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Calculate and split a trip's fuel cost")]
    Split {
        #[arg(long, help = "Start location query")]
        from: Option<String>,

        #[arg(long, help = "Destination query")]
        to: Option<String>,

        #[arg(long, help = "Trip length in km (accepts 7,1 or 7.1)")]
        distance: Option<String>,

        #[arg(long, help = "Fuel consumption in l/100km")]
        consumption: Option<String>,

        #[arg(long, help = "Gas price in €/l")]
        price: Option<String>,

        #[arg(long, help = "Number of people sharing the cost")]
        persons: Option<String>,

        #[arg(long, help = "Bias place search around LAT,LNG")]
        near: Option<LatLng>,
    },

    #[command(about = "Search and inspect places")]
    Places {
        #[command(subcommand)]
        action: PlacesAction,
    },

    #[command(about = "Driving distance between two places")]
    Distance {
        #[arg(long, help = "Start location query")]
        from: String,

        #[arg(long, help = "Destination query")]
        to: String,

        #[arg(long, help = "Bias place search around LAT,LNG")]
        near: Option<LatLng>,
    },

    #[command(about = "Show average gasoline prices")]
    Price {
        #[arg(long, help = "Bypass the cache and fetch fresh prices")]
        refresh: bool,
    },

    #[command(about = "Manage cached data")]
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand)]
enum PlacesAction {
    #[command(about = "List place suggestions for a query")]
    Search {
        #[arg(help = "Free-text location query")]
        query: String,

        #[arg(long, help = "Bias results around LAT,LNG")]
        near: Option<LatLng>,
    },

    #[command(about = "Closest place to a coordinate")]
    Nearby {
        #[arg(long, help = "Coordinate as LAT,LNG")]
        near: LatLng,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    #[command(about = "Remove cached data")]
    Clear,
}

fn main() {
    let cli = Cli::parse();

    // Re-initialization only matters in tests; ignore it.
    let _ = logging::init_logging(cli.verbose);

    if cli.verbose {
        eprintln!("{}", "Verbose mode enabled".dimmed());
    }

    if let Err(e) = run(cli) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let locale = Locale::negotiate(cli.locale.as_deref());

    match cli.command {
        Commands::Split {
            from,
            to,
            distance,
            consumption,
            price,
            persons,
            near,
        } => {
            // Resolving places from flags needs the API key up front; the
            // interactive form degrades to manual distance entry without it.
            let places = if distance.is_none() && from.is_some() && to.is_some() {
                Some(PlacesClient::from_env(locale)?)
            } else {
                PlacesClient::from_env(locale).ok()
            };

            let form = TripForm::new(locale, places, near);
            form.run(&SplitArgs {
                from,
                to,
                distance,
                consumption,
                price,
                persons,
            })?;
            Ok(())
        }

        Commands::Places { action } => match action {
            PlacesAction::Search { query, near } => {
                let client = PlacesClient::from_env(locale)?;
                let predictions = client.autocomplete(&query, near)?;

                if predictions.is_empty() {
                    println!("{} No matches for: {}", "⚠".yellow(), query.cyan());
                    return Ok(());
                }

                let best = best_prediction(&predictions).map(|p| p.place_id.clone());
                for prediction in &predictions {
                    let marker = if Some(&prediction.place_id) == best.as_ref() {
                        "✓".green()
                    } else {
                        "•".blue()
                    };
                    println!(
                        "{} {} {}",
                        marker,
                        prediction.description,
                        prediction.place_id.dimmed()
                    );
                }
                Ok(())
            }
            PlacesAction::Nearby { near } => {
                let client = PlacesClient::from_env(locale)?;
                match client.nearby(near)? {
                    Some(place) => {
                        println!(
                            "{} {}, {} {}",
                            "✓".green(),
                            place.name,
                            place.vicinity,
                            place.place_id.dimmed()
                        );
                        Ok(())
                    }
                    None => {
                        println!("{} No place found at that coordinate", "⚠".yellow());
                        Ok(())
                    }
                }
            }
        },

        Commands::Distance { from, to, near } => {
            let client = PlacesClient::from_env(locale)?;
            let validator = Validator::new(locale.messages());

            let resolve = |field: Field, query: &str| -> Result<Prediction> {
                let predictions = client.autocomplete(query, near)?;
                best_prediction(&predictions)
                    .cloned()
                    .ok_or_else(|| validator.missing_selection(field).into())
            };
            let origin = resolve(Field::From, &from)?;
            let destination = resolve(Field::To, &to)?;

            match client.distance(&origin.place_id, &destination.place_id)? {
                DistanceOutcome::Route(leg) => {
                    println!(
                        "{} {} → {}",
                        "✓".green(),
                        origin.description.cyan(),
                        destination.description.cyan()
                    );
                    println!("  {} ({})", leg.distance_text.bold(), leg.duration_text);
                    Ok(())
                }
                DistanceOutcome::NoRoute => Err(SplitError::no_route(
                    origin.description,
                    destination.description,
                )),
            }
        }

        Commands::Price { refresh } => {
            let messages = locale.messages();
            let prices = PriceLookup::new()?.fetch(refresh)?;

            if let Some(price) = prices.finland {
                println!("{}: {}", messages.finland_avg, format!("{price:.2} €/l").bold());
            }
            if let Some(price) = prices.helsinki {
                println!("{}: {}", messages.helsinki_avg, format!("{price:.2} €/l").bold());
            }
            println!("{}", format!("({}: tankille.fi)", messages.source).dimmed());
            Ok(())
        }

        Commands::Cache { action } => match action {
            CacheAction::Clear => {
                let store = CacheStore::new()?;
                store.clear()?;
                println!("{} Cache cleared", "✓".green());
                Ok(())
            }
        },
    }
}
