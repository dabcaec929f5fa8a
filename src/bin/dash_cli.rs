// src/bin/dash_cli.rs
use clap::{Parser, Subcommand};
use dotenv::dotenv;

use invest_dash::client::StatusInvestClient;
use invest_dash::config::Config;
use invest_dash::error::ScrapeError;
use invest_dash::extract;
use invest_dash::normalize::normalize;
use invest_dash::types::ExtractionResult;

#[derive(Parser)]
#[command(name = "dash-cli")]
#[command(about = "Status Invest indicator lookup CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a single ticker in one category
    Lookup {
        ticker: String,
        #[arg(short, long, default_value = "acoes")]
        category: String,
    },
    /// Fetch the three dashboard categories at once
    Board {
        #[arg(long, default_value = "BBDC4")]
        acoes: String,
        #[arg(long, default_value = "KNRI11")]
        fundos: String,
        #[arg(long, default_value = "HGAG11")]
        fiagros: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let client = StatusInvestClient::new(&Config::from_env())?;

    match cli.command {
        Commands::Lookup { ticker, category } => {
            let result = lookup(&client, &category, &ticker).await;
            let failed = result.is_err();
            print_section(&format!("{}/{}", category, ticker), &result);
            if failed {
                std::process::exit(1);
            }
        }
        Commands::Board {
            acoes,
            fundos,
            fiagros,
        } => {
            // The three categories are independent; one failing must not
            // block the others.
            let (a, f, g) = tokio::join!(
                lookup(&client, "acoes", &acoes),
                lookup(&client, "fundos-imobiliarios", &fundos),
                lookup(&client, "fiagros", &fiagros),
            );
            print_section(&format!("Ações ({})", acoes), &a);
            print_section(&format!("Fundos Imobiliários ({})", fundos), &f);
            print_section(&format!("Fiagros ({})", fiagros), &g);
        }
    }

    Ok(())
}

async fn lookup(
    client: &StatusInvestClient,
    category: &str,
    ticker: &str,
) -> Result<ExtractionResult, ScrapeError> {
    let raw = extract::extract(client, category, ticker).await?;
    Ok(normalize(&raw))
}

fn print_section(heading: &str, result: &Result<ExtractionResult, ScrapeError>) {
    println!("\n📈 {}", heading);
    match result {
        Ok(data) => {
            println!("{}", data.name);
            for (label, value) in &data.indicators {
                println!("  {:<40} {}", label, value);
            }
        }
        Err(e) => eprintln!("  ❌ {}", e),
    }
}
