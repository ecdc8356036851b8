//! Wanderlust CLI — catalog queries, budget figures and route resolution.
//!
//! Commands:
//! - `destinations` — list destinations matching a search and tags
//! - `show` — print one destination with its stays and experiences
//! - `accommodations` — filter stays by text, destination, price and type
//! - `experiences` — list experiences, optionally for one destination
//! - `budget` — compute totals and the category breakdown
//! - `route` — resolve a path to a page
//! - `catalog export` — dump the active catalog as TOML
//! - `config` — print the effective settings

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use wanderlust_core::budget::{
    format_amount, format_percentage, BudgetCalculator, Currency, ExpenseDraft,
};
use wanderlust_core::catalog::Catalog;
use wanderlust_core::domain::DestinationId;
use wanderlust_core::filter::{AccommodationFilter, DestinationFilter, PriceRange};
use wanderlust_core::route::Route;
use wanderlust_core::settings::Settings;

#[derive(Parser)]
#[command(
    name = "wanderlust",
    about = "Wanderlust CLI — destinations, stays and trip budgets"
)]
struct Cli {
    /// Settings file. Defaults to <config dir>/wanderlust/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List destinations.
    Destinations {
        /// Case-insensitive substring of the name or country.
        #[arg(long, default_value = "")]
        search: String,

        /// Keep destinations with any of these tags (repeatable).
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Show one destination in full.
    Show {
        /// Destination id, e.g. kyoto.
        id: String,
    },
    /// List accommodations.
    Accommodations {
        /// Case-insensitive substring of the name or location.
        #[arg(long, default_value = "")]
        search: String,

        /// Destination id.
        #[arg(long)]
        destination: Option<String>,

        /// Lowest nightly price.
        #[arg(long, default_value_t = 0)]
        min_price: u32,

        /// Highest nightly price. Defaults to the configured ceiling.
        #[arg(long)]
        max_price: Option<u32>,

        /// Keep these types: Hotel, Hostel, Apartment, Resort, Villa, Guesthouse (repeatable).
        #[arg(long = "type")]
        types: Vec<String>,
    },
    /// List experiences.
    Experiences {
        /// Destination id.
        #[arg(long)]
        destination: Option<String>,
    },
    /// Compute a trip budget.
    Budget {
        /// Travelers. Defaults to the configured value.
        #[arg(long)]
        travelers: Option<i64>,

        /// Days. Defaults to the configured value.
        #[arg(long)]
        days: Option<i64>,

        /// Currency code: USD, EUR, GBP, JPY, CAD, AUD.
        #[arg(long)]
        currency: Option<String>,

        /// Destination label.
        #[arg(long, default_value = "")]
        destination: String,

        /// Extra expense as category:description:amount (repeatable).
        #[arg(long = "expense")]
        expenses: Vec<String>,

        /// Start from empty categories instead of the sample expenses.
        #[arg(long, default_value_t = false)]
        empty: bool,

        /// Print the summary as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Resolve a path like /itinerary?destination=bali to a page.
    Route {
        path: String,
    },
    /// Catalog commands.
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Print the effective settings as TOML.
    Config,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Write the active catalog as TOML.
    Export {
        /// Output file. Prints to stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_ref())?;

    match cli.command {
        Commands::Destinations { search, tags } => run_destinations(&settings, search, tags),
        Commands::Show { id } => run_show(&settings, &id),
        Commands::Accommodations {
            search,
            destination,
            min_price,
            max_price,
            types,
        } => run_accommodations(&settings, search, destination, min_price, max_price, types),
        Commands::Experiences { destination } => run_experiences(&settings, destination),
        Commands::Budget {
            travelers,
            days,
            currency,
            destination,
            expenses,
            empty,
            json,
        } => run_budget(
            &settings,
            BudgetArgs {
                travelers,
                days,
                currency,
                destination,
                expenses,
                empty,
                json,
            },
        ),
        Commands::Route { path } => run_route(&settings, &path),
        Commands::Catalog { action } => match action {
            CatalogAction::Export { output } => run_catalog_export(&settings, output),
        },
        Commands::Config => {
            print!("{}", settings.to_toml()?);
            Ok(())
        }
    }
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display())),
        None => Settings::load_default().context("loading settings"),
    }
}

fn load_catalog(settings: &Settings) -> Result<Catalog> {
    settings.load_catalog().context("loading catalog")
}

fn run_destinations(settings: &Settings, search: String, tags: Vec<String>) -> Result<()> {
    let catalog = load_catalog(settings)?;
    let filter = DestinationFilter { search, tags };
    let matches = filter.apply(&catalog.destinations);

    if matches.is_empty() {
        println!("No destinations match.");
        return Ok(());
    }
    for d in &matches {
        println!(
            "{:<12} {:<24} {}",
            d.id.as_str(),
            d.display_name(),
            d.tags.join(", ")
        );
    }
    println!("\n{} of {} destinations", matches.len(), catalog.destinations.len());
    Ok(())
}

fn run_show(settings: &Settings, id: &str) -> Result<()> {
    let catalog = load_catalog(settings)?;
    let Some(d) = catalog.destination(id) else {
        bail!("unknown destination '{id}'");
    };

    println!("{}", d.display_name());
    println!("{}", "=".repeat(d.display_name().chars().count()));
    println!("{}\n", d.description);
    println!("Tags:             {}", d.tags.join(", "));
    println!("Best time:        {}", d.best_time_to_visit);
    println!("Budget:           {}", d.budget);
    println!("Recommended stay: {}", d.recommended_stay);
    println!("Emergency:        {}", d.emergency_number());

    println!("\nHighlights");
    for h in &d.highlights {
        println!("  {:<28} {}", h.title, h.description);
    }

    let stays = catalog.accommodations_for(id);
    if !stays.is_empty() {
        println!("\nAccommodations");
        for a in stays {
            println!("  {:<30} {:<11} ${}/night", a.name, a.kind, a.price_per_night);
        }
    }

    let experiences = catalog.experiences_for(id);
    if !experiences.is_empty() {
        println!("\nExperiences");
        for e in experiences {
            println!("  {:<36} ${:<5} {}", e.title, e.price, e.duration);
        }
    }
    Ok(())
}

fn run_accommodations(
    settings: &Settings,
    search: String,
    destination: Option<String>,
    min_price: u32,
    max_price: Option<u32>,
    types: Vec<String>,
) -> Result<()> {
    let catalog = load_catalog(settings)?;
    let max = max_price.unwrap_or(settings.accommodations.price_ceiling);
    if min_price > max {
        bail!("--min-price {min_price} is above the maximum {max}");
    }
    let filter = AccommodationFilter {
        search,
        destination: destination.map(DestinationId::from),
        price: PriceRange { min: min_price, max },
        types,
    };
    let matches = filter.apply(&catalog.accommodations);

    println!("{} properties found", matches.len());
    for a in matches {
        println!(
            "  {:<30} {:<11} {:<24} ${:>5}  {:.1} ({})",
            a.name, a.kind, a.location, a.price_per_night, a.rating, a.review_count
        );
    }
    Ok(())
}

fn run_experiences(settings: &Settings, destination: Option<String>) -> Result<()> {
    let catalog = load_catalog(settings)?;
    let experiences: Vec<_> = match destination.as_deref() {
        Some(id) => catalog.experiences_for(id),
        None => catalog.experiences.iter().collect(),
    };

    if experiences.is_empty() {
        println!("No experiences found.");
        return Ok(());
    }
    for e in experiences {
        println!(
            "{:<36} {:<12} {:<12} ${:<5} {}",
            e.title, e.destination_id.as_str(), e.category, e.price, e.duration
        );
    }
    Ok(())
}

struct BudgetArgs {
    travelers: Option<i64>,
    days: Option<i64>,
    currency: Option<String>,
    destination: String,
    expenses: Vec<String>,
    empty: bool,
    json: bool,
}

fn run_budget(settings: &Settings, args: BudgetArgs) -> Result<()> {
    let mut budget = if args.empty {
        let b = &settings.budget;
        BudgetCalculator::empty(b.travelers, b.days, b.currency)
    } else {
        settings.new_budget()
    };
    if let Some(code) = args.currency.as_deref() {
        budget.currency = code.parse::<Currency>().map_err(|e| anyhow!(e))?;
    }
    if let Some(n) = args.travelers {
        budget.set_travelers(n);
    }
    if let Some(n) = args.days {
        budget.set_days(n);
    }
    budget.destination = args.destination;

    for raw in &args.expenses {
        let draft = parse_expense(raw)?;
        if budget.category(&draft.category).is_none() {
            bail!("unknown budget category '{}'", draft.category);
        }
        if budget.add_expense_from(&draft).is_none() {
            bail!("invalid expense '{raw}': description and a positive amount are required");
        }
    }

    let summary = budget.summary();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if !summary.destination.is_empty() {
        println!("Trip to {}", summary.destination);
    }
    println!(
        "{} travelers, {} days, {}",
        summary.travelers,
        summary.days,
        summary.currency.label()
    );
    println!();
    println!("Total Budget:        {} {}", format_amount(summary.total), summary.currency);
    println!("Per Person:          {}", format_amount(summary.per_person));
    println!("Per Day:             {}", format_amount(summary.per_day));
    println!("Per Person Per Day:  {}", format_amount(summary.per_person_per_day));
    println!();
    println!("Breakdown");
    for row in &summary.categories {
        println!(
            "  {:<18} {:>10} {:>7}",
            row.name,
            format_amount(row.total),
            format_percentage(row.percentage)
        );
    }
    Ok(())
}

/// `category:description:amount`. The description may itself contain colons.
fn parse_expense(raw: &str) -> Result<ExpenseDraft> {
    let (category, rest) = raw
        .split_once(':')
        .ok_or_else(|| anyhow!("expense '{raw}' is not category:description:amount"))?;
    let (description, amount) = rest
        .rsplit_once(':')
        .ok_or_else(|| anyhow!("expense '{raw}' is not category:description:amount"))?;
    let amount: f64 = amount
        .trim()
        .parse()
        .with_context(|| format!("expense '{raw}' has a non-numeric amount"))?;
    if !amount.is_finite() {
        bail!("expense '{raw}' amount must be a finite number");
    }
    Ok(ExpenseDraft {
        category: category.trim().to_string(),
        description: description.trim().to_string(),
        amount,
    })
}

fn run_route(settings: &Settings, path: &str) -> Result<()> {
    let route = Route::parse(path);
    println!("{:<8} {}", "path", route.path());
    println!("{:<8} {}", "page", route.title());

    let catalog = load_catalog(settings)?;
    match &route {
        Route::DestinationDetail(id) => match catalog.destination(id.as_str()) {
            Some(d) => println!("{:<8} {}", "target", d.display_name()),
            None => println!("{:<8} unknown destination, renders Page Not Found", "target"),
        },
        Route::Itinerary {
            destination: Some(id),
        } => match catalog.destination(id.as_str()) {
            Some(d) => println!("{:<8} preselects {}", "target", d.display_name()),
            None => println!("{:<8} unknown destination, picker stays open", "target"),
        },
        _ => {}
    }
    Ok(())
}

fn run_catalog_export(settings: &Settings, output: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(settings)?;
    let toml = catalog.to_toml()?;
    match output {
        Some(path) => {
            std::fs::write(&path, toml)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Catalog written to: {}", path.display());
        }
        None => print!("{toml}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_expense_splits_fields() {
        let d = parse_expense("food:Street food: night market:42.5").unwrap();
        assert_eq!(d.category, "food");
        assert_eq!(d.description, "Street food: night market");
        assert_eq!(d.amount, 42.5);
    }

    #[test]
    fn parse_expense_rejects_bad_input() {
        assert!(parse_expense("food").is_err());
        assert!(parse_expense("food:lunch").is_err());
        assert!(parse_expense("food:lunch:lots").is_err());
        assert!(parse_expense("food:lunch:inf").is_err());
        assert!(parse_expense("food:lunch:NaN").is_err());
        assert!(parse_expense("food:lunch:-infinity").is_err());
    }

    #[test]
    fn cli_parses_budget_flags() {
        let cli = Cli::try_parse_from([
            "wanderlust",
            "budget",
            "--travelers",
            "3",
            "--expense",
            "food:Dinner:80",
            "--expense",
            "activities:Dive:120",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Budget {
                travelers,
                expenses,
                json,
                ..
            } => {
                assert_eq!(travelers, Some(3));
                assert_eq!(expenses.len(), 2);
                assert!(json);
            }
            _ => panic!("expected budget command"),
        }
    }

    #[test]
    fn cli_global_config_flag() {
        let cli = Cli::try_parse_from(["wanderlust", "route", "/", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }
}
