use std::env;
use std::process;

use culinary_companion::store::{JsonFileStore, Settings};
use culinary_companion::{
    Companion, CompanionConfig, MeasurementSystem, SuggestionResult,
};

const USAGE: &str = "Usage: culinary-companion [OPTIONS] <ingredients>\n\
\n\
Options:\n\
  --weekly              Build a 7-day dinner plan instead of meal suggestions\n\
  --image <path>        Attach a fridge/pantry photo (repeatable with --weekly)\n\
  --metric              Use metric quantities\n\
  --imperial            Use imperial quantities (default when nothing is stored)\n\
  --dislikes <text>     Ingredients the suggestions must avoid\n\
  --craving <text>      A craving at least one planned meal should satisfy\n\
  --adults <n>          Household adults (default 2)\n\
  --teens <n>           Household teens (default 0)\n\
  --toddlers <n>        Household toddlers (default 0)\n\
\n\
Stored settings (measurement system, dislikes, favorites, household) are\n\
read from the configured store file and can be overridden per run.\n\
Requires GEMINI_API_KEY to be set in the environment or config.";

fn parse_count(flag: &str, value: Option<String>) -> u32 {
    value
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| {
            eprintln!("{} expects a non-negative number\n\n{}", flag, USAGE);
            process::exit(2);
        })
}

#[tokio::main]
async fn main() {
    env_logger::init();

    // Persisted settings supply the defaults; command-line flags override.
    let config = CompanionConfig::load().unwrap_or_default();
    let mut settings = Settings::new(JsonFileStore::open(&config.store_path));
    let mut household = settings.household();

    let mut args = env::args().skip(1);
    let mut builder = Companion::builder().with_settings(&mut settings);
    let mut ingredients = Vec::new();
    let mut weekly = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--weekly" => weekly = true,
            "--metric" => builder = builder.measurement(MeasurementSystem::Metric),
            "--imperial" => builder = builder.measurement(MeasurementSystem::Imperial),
            "--image" => match args.next() {
                Some(path) => builder = builder.image(path),
                None => {
                    eprintln!("--image expects a path\n\n{}", USAGE);
                    process::exit(2);
                }
            },
            "--dislikes" => match args.next() {
                Some(text) => builder = builder.dislikes(text),
                None => {
                    eprintln!("--dislikes expects text\n\n{}", USAGE);
                    process::exit(2);
                }
            },
            "--craving" => match args.next() {
                Some(text) => builder = builder.craving(text),
                None => {
                    eprintln!("--craving expects text\n\n{}", USAGE);
                    process::exit(2);
                }
            },
            "--adults" => household.adults = parse_count("--adults", args.next()),
            "--teens" => household.teens = parse_count("--teens", args.next()),
            "--toddlers" => household.toddlers = parse_count("--toddlers", args.next()),
            "--help" | "-h" => {
                println!("{}", USAGE);
                return;
            }
            other => ingredients.push(other.to_string()),
        }
    }

    if weekly {
        builder = builder.weekly().household(household);
    }
    if !ingredients.is_empty() {
        builder = builder.ingredients(ingredients.join(" "));
    }

    match builder.build().await {
        Ok(SuggestionResult::Recipes(response)) => {
            println!("{}", serde_json::to_string_pretty(&response).unwrap());
        }
        Ok(SuggestionResult::WeekPlan(plan)) => {
            println!("{}", serde_json::to_string_pretty(&plan).unwrap());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
