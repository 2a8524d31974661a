use std::error::Error;

use clap::Parser;
use itertools::Itertools;
use num_format::{Locale, ToFormattedString};
use serde::Serialize;
use simple_logger::SimpleLogger;
use tinytemplate::TinyTemplate;

use ghg::record::{calculate_csv, Batch, ResultRecord};
use ghg::Scope;

static TEMPLATE_NAME: &'static str = "t";
static TEMPLATE: &'static str = include_str!("../summary.md");

const ABOUT: &'static str = r#"Calculates the emissions of every activity record of a CSV file.

The input has the columns `id`, `scope` (1-3), `quantity`, `factor_name`, `unit`, `factor_kg_co2e`,
and optionally `factor_kg_co2`, `factor_kg_ch4`, `factor_kg_n2o`, `factor_source` and `metadata`
(a JSON object, e.g. `{"scope_3_category": 5, "waste_type": "organic"}`).

The results are written as CSV and a summary per scope is printed.
Malformed records are logged and skipped.
"#;

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT)]
struct Cli {
    /// Path to the CSV of activity records
    #[arg(short, long)]
    input: String,
    /// Path to write the CSV of results to
    #[arg(short, long, default_value = "results.csv")]
    output: String,
}

#[derive(Serialize)]
struct ScopeSummary {
    name: String,
    total_kg: String,
    total_tonnes: String,
    count: usize,
    estimated: usize,
}

#[derive(Serialize)]
struct Context {
    source: String,
    scopes: Vec<ScopeSummary>,
    total_kg: String,
    total_tonnes: String,
    count: usize,
    skipped: usize,
}

fn kg(value: f64) -> String {
    (value.round() as i64).to_formatted_string(&Locale::en)
}

fn tonnes(value: f64) -> String {
    format!("{:.2}", value / 1000.0)
}

fn summarize(source: String, results: &[ResultRecord], skipped: usize) -> Context {
    let scopes = results
        .iter()
        .into_group_map_by(|r| r.scope)
        .into_iter()
        .sorted_by_key(|(scope, _)| *scope)
        .map(|(scope, results)| {
            let total = results.iter().map(|r| r.co2e_kg).sum::<f64>();
            ScopeSummary {
                name: Scope::try_from(scope)
                    .map(|s| s.to_string())
                    .unwrap_or_else(|_| format!("Scope {scope}")),
                total_kg: kg(total),
                total_tonnes: tonnes(total),
                count: results.len(),
                estimated: results.iter().filter(|r| r.is_estimated).count(),
            }
        })
        .collect();

    let total = results.iter().map(|r| r.co2e_kg).sum::<f64>();
    Context {
        source,
        scopes,
        total_kg: kg(total),
        total_tonnes: tonnes(total),
        count: results.len(),
        skipped,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let cli = Cli::parse();

    let data = std::fs::read(&cli.input)?;
    let Batch { results, skipped } = calculate_csv(&data);
    log::info!(
        "{} records calculated from {}, {} skipped",
        results.len(),
        cli.input,
        skipped
    );

    std::fs::write(&cli.output, ghg::csv::serialize(results.iter())?)?;
    log::info!("{} results written to {}", results.len(), cli.output);

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template(TEMPLATE_NAME, TEMPLATE)?;

    let rendered = tt.render(TEMPLATE_NAME, &summarize(cli.input, &results, skipped))?;
    println!("{rendered}");

    Ok(())
}
