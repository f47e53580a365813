//! Catalog binary entry point

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use catalog::{
    Catalog, PlanetsClient, ProductDraft, ReqwestTransport, is_integer, remove_duplicates,
    to_lower_case,
};
use shared::logging::init_tracing_with_level;
use shared::{CatalogConfig, Primitive};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Product catalog utilities and Star Wars planets lookup")]
struct Args {
    /// Log level override (otherwise CATALOG_LOG_LEVEL, then info)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether a JSON value is a whole number
    IsInteger {
        /// JSON value, e.g. 8, "8" or null
        value: Option<String>,
    },
    /// Lowercase a string
    Lower { text: Option<String> },
    /// Remove duplicates from a JSON array of numbers or strings
    Dedupe {
        /// JSON array, e.g. '[13, 2, -5, 13]'
        items: Option<String>,
    },
    /// Validate a product draft given as JSON and assign it an id
    Create { draft: String },
    /// Generate a fake product
    Fake,
    /// Generate a fake product on behalf of a caller
    Random {
        #[arg(long)]
        email: String,
    },
    /// Fetch the first page of Star Wars planets
    Planets,
}

/// Read a CLI argument as JSON, falling back to a plain string
fn parse_json_value(raw: Option<String>) -> Option<Value> {
    raw.map(|raw| serde_json::from_str::<Value>(&raw).unwrap_or(Value::String(raw)))
}

fn parse_items(raw: Option<String>) -> anyhow::Result<Option<Vec<Primitive>>> {
    raw.map(|raw| Primitive::parse_list(&raw))
        .transpose()
        .context("items must be a JSON array of integers or strings")
}

fn parse_draft(raw: &str) -> anyhow::Result<ProductDraft> {
    serde_json::from_str(raw).context("draft must be a product JSON object")
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = CatalogConfig::from_env().context("loading configuration")?;
    init_tracing_with_level(Some(args.log_level.as_deref().unwrap_or(&config.log_level)));

    match args.command {
        Command::IsInteger { value } => {
            println!("{}", is_integer(parse_json_value(value).as_ref()));
        }
        Command::Lower { text } => {
            println!("{}", to_lower_case(text.as_deref()));
        }
        Command::Dedupe { items } => {
            let items = parse_items(items)?;
            print_json(&remove_duplicates(items.as_deref())?)?;
        }
        Command::Create { draft } => {
            let draft = parse_draft(&draft)?;
            let catalog = Catalog::with_defaults();
            match catalog.create_product(draft) {
                Ok(product) => print_json(&product)?,
                Err(err) => {
                    for violation in err.violations() {
                        eprintln!("  - {violation}");
                    }
                    return Err(err.into());
                }
            }
        }
        Command::Fake => {
            print_json(&Catalog::with_defaults().create_fake_product())?;
        }
        Command::Random { email } => {
            print_json(&Catalog::with_defaults().create_random_product(&email)?)?;
        }
        Command::Planets => {
            let client = PlanetsClient::with_url(ReqwestTransport::new(), config.planets_url);
            print_json(&client.get_star_wars_planets().await?)?;
        }
    }

    Ok(())
}
