use caffcheck_core::*;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "caffcheck")]
#[command(about = "Daily caffeine intake assessment", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override the item catalog with a JSON file
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess today's intake against your personal daily limit
    Assess {
        /// Age in years
        #[arg(long, allow_negative_numbers = true)]
        age: f64,

        /// Body weight in kilograms
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Consumed item as ID or ID:QTY (repeatable; quantity defaults to 1)
        #[arg(long = "item", value_name = "ID[:QTY]", value_parser = parse_entry, required = true)]
        items: Vec<ConsumptionEntry>,

        /// Emit the assessment as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the item catalog with caffeine content per unit
    Items {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    caffcheck_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;

    // Resolve the catalog: CLI override, then config, then built-in
    let catalog = match cli.catalog {
        Some(path) => Catalog::load_from_path(&path)?,
        None => config.load_catalog()?,
    };

    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    match cli.command {
        Commands::Assess {
            age,
            weight,
            items,
            json,
        } => cmd_assess(&catalog, &config, age, weight, &items, json),
        Commands::Items { json } => cmd_items(&catalog, json),
    }
}

fn cmd_assess(
    catalog: &Catalog,
    config: &Config,
    age: f64,
    weight: f64,
    entries: &[ConsumptionEntry],
    json: bool,
) -> Result<()> {
    let policy = config.limit_policy()?;
    let profile = Profile::new(age, weight);

    tracing::debug!("Assessing {} entries for age {}", entries.len(), age);

    let assessment = assess(&profile, entries, catalog, &policy)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        display_assessment(&assessment);
    }

    Ok(())
}

fn cmd_items(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog.items_sorted())?);
        return Ok(());
    }

    println!("\nItem catalog (caffeine per unit):\n");
    for item in catalog.items_sorted() {
        println!(
            "  {:>3}  {:<34} {:>6.1} mg",
            item.id, item.name, item.caffeine_per_unit_mg
        );
    }
    println!();

    Ok(())
}

fn display_assessment(assessment: &Assessment) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  CAFFEINE ASSESSMENT");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Total intake: {:.1} mg", assessment.total_intake_mg);
    println!("  Daily limit:  {:.1} mg", assessment.limit_mg);
    println!();

    if assessment.over_limit {
        println!("  ⚠ Over the limit");
        println!();
        println!("  Problems:");
        for problem in &assessment.problems {
            println!("    • {}", problem);
        }
    } else {
        println!("  ✓ Within the limit");
    }

    println!();
    println!("  Recommendations:");
    for rec in &assessment.recommendations {
        println!("    → {}", rec);
    }
    println!();
}

/// Parse an `ID` or `ID:QTY` item spec into a consumption entry
fn parse_entry(spec: &str) -> std::result::Result<ConsumptionEntry, String> {
    let (id_part, qty_part) = match spec.split_once(':') {
        Some((id, qty)) => (id, Some(qty)),
        None => (spec, None),
    };

    let item_id: u32 = id_part
        .trim()
        .parse()
        .map_err(|_| format!("invalid item spec '{}': expected ID or ID:QTY", spec))?;

    let quantity: u32 = match qty_part {
        Some(qty) => qty
            .trim()
            .parse()
            .map_err(|_| format!("invalid quantity in '{}': expected ID or ID:QTY", spec))?,
        None => 1,
    };

    Ok(ConsumptionEntry::new(item_id, quantity))
}
