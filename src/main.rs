use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use console::style;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use costctl::{advise_for, config, estimate, Provider};

#[derive(Parser)]
#[command(name = "costctl")]
#[command(
    about = "Cloud cost estimation and migration advice for AWS and Azure",
    long_about = "costctl estimates monthly cloud costs for common compute, storage, and database\nworkloads on AWS and Azure, and suggests simple migration and optimization steps.\n\nPrices are a compiled-in sample table; supply your own with --pricing or a\ncostctl-pricing.toml file. Always verify exact prices with each cloud provider."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pricing file path (TOML; defaults to the builtin sample table)
    #[arg(short, long, global = true)]
    pricing: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    output: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List service categories
    Categories,
    /// List providers available for a category
    Providers {
        /// Service category name (see `costctl categories`)
        #[arg(short, long)]
        category: String,
    },
    /// List priced options for a category and provider
    Options {
        /// Service category name
        #[arg(short, long)]
        category: String,
        /// Cloud provider
        #[arg(short = 'P', long)]
        provider: Provider,
    },
    /// Estimate monthly cost for a selection
    Estimate {
        /// Cloud provider
        #[arg(short = 'P', long)]
        provider: Provider,
        /// Service category name
        #[arg(short, long)]
        category: String,
        /// Service option name (see `costctl options`)
        #[arg(short, long)]
        option: String,
        /// Monthly usage (hours or GB depending on the category;
        /// defaults to 730 hours or 100 GB)
        #[arg(short, long)]
        usage: Option<f64>,
        /// Skip the migration/optimization advice
        #[arg(long)]
        no_advice: bool,
    },
    /// Write the builtin price table as a pricing file for customization
    Init {
        /// Output path for the pricing file
        #[arg(short, long, default_value = config::LOCAL_PRICING_FILE)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Suppress INFO by default, only show warnings and errors
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let json = match cli.output.as_str() {
        "json" => true,
        "text" => false,
        other => bail!("Unknown output format: {} (expected text or json)", other),
    };

    // `init` never loads a pricing file; it writes one
    if let Commands::Init { output } = &cli.command {
        config::init_pricing(output)?;
        return Ok(());
    }

    let catalog = config::load(cli.pricing.as_deref())?;

    match cli.command {
        Commands::Categories => {
            print_list(&catalog.categories(), json)?;
        }
        Commands::Providers { category } => {
            let providers: Vec<String> = catalog
                .providers(&category)?
                .iter()
                .map(Provider::to_string)
                .collect();
            let providers: Vec<&str> = providers.iter().map(String::as_str).collect();
            print_list(&providers, json)?;
        }
        Commands::Options { category, provider } => {
            print_list(&catalog.options(&category, provider)?, json)?;
        }
        Commands::Estimate {
            provider,
            category,
            option,
            usage,
            no_advice,
        } => {
            let usage = match usage {
                Some(u) => u,
                None => catalog.unit(&category)?.default_usage(),
            };

            // Zero or negative usage: nothing to estimate. Presentation
            // policy, not an engine error.
            if usage <= 0.0 {
                eprintln!(
                    "{}",
                    style("Enter a usage amount greater than 0 to estimate costs.")
                        .yellow()
                );
                return Ok(());
            }

            let est = estimate(&catalog, provider, &category, &option, usage)?;
            let advice = if no_advice {
                vec![]
            } else {
                advise_for(&catalog, provider, &category, usage)
            };

            if json {
                let out = serde_json::json!({
                    "estimate": est,
                    "advice": advice,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print_estimate(&est, &advice);
            }
        }
        Commands::Init { .. } => unreachable!("handled above"),
    }

    Ok(())
}

fn print_list(items: &[&str], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for item in items {
            println!("{}", item);
        }
    }
    Ok(())
}

fn print_estimate(est: &costctl::Estimate, advice: &[String]) {
    println!(
        "{}",
        style(format!(
            "Estimated monthly cost on {}: ${:.2}",
            est.provider, est.monthly_cost
        ))
        .bold()
        .green()
    );
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![Cell::new("Breakdown"), Cell::new("")]);
    table.add_row(vec!["Provider".to_string(), est.provider.to_string()]);
    table.add_row(vec!["Service category".to_string(), est.category.clone()]);
    table.add_row(vec!["Option".to_string(), est.option.clone()]);
    table.add_row(vec![
        "Unit price".to_string(),
        format!("${:.4} {}", est.unit_price, est.unit.label()),
    ]);
    table.add_row(vec![
        "Usage".to_string(),
        format!("{} {}", est.usage_amount, est.unit.quantity_label()),
    ]);
    table.add_row(vec![
        "Estimated monthly cost".to_string(),
        format!("${:.2}", est.monthly_cost),
    ]);
    println!("{table}");

    if !advice.is_empty() {
        println!();
        println!("{}", style("Migration & optimization advice").bold());
        for item in advice {
            println!("  - {}", item);
        }
    }
}
