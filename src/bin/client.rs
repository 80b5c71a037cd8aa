use clap::{Args, Parser, Subcommand};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Look up orders from the command line
#[derive(Parser, Debug)]
#[command(name = "order-lookup")]
#[command(about = "client cli used to look up orders on the server", version, long_about = None
)]
struct Cli {
    #[arg(long, help = "Server base url", default_value = "http://localhost:8080")]
    host: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// print every record of one order
    #[command(arg_required_else_help = true)]
    Order(OrderArgs),
}

#[derive(Debug, Args)]
struct OrderArgs {
    #[arg(help = "Order id to look up", value_name = "ORDER_ID")]
    id: String,
}

/// columns shown per record
const COLUMNS: [&str; 6] = ["orderId", "customerName", "customerEmail", "status", "orderDate", "totalAmount"];

#[derive(Debug, Deserialize)]
struct MessageResponse {
    message: String,
    error: Option<String>,
}

fn cell(record: &Map<String, Value>, column: &str) -> String {
    match record.get(column) {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();

    match args.command {
        Commands::Order(OrderArgs { id }) => {
            println!("looking up order={}", id);
            let res = Client::new()
                .get(format!("{}/orders", args.host.trim_end_matches('/')))
                .query(&[("orderId", id.as_str())])
                .send()
                .await?;
            match res.status() {
                StatusCode::OK => {
                    let records = res.json::<Vec<Map<String, Value>>>().await?;
                    println!("{}", COLUMNS.join("\t"));
                    for record in &records {
                        let row = COLUMNS.iter().map(|c| cell(record, c)).collect::<Vec<_>>();
                        println!("{}", row.join("\t"));
                    }
                },
                StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
                    let body = res.json::<MessageResponse>().await?;
                    println!("{}", body.message);
                },
                StatusCode::INTERNAL_SERVER_ERROR => {
                    let body = res.json::<MessageResponse>().await?;
                    println!("{}: {}", body.message, body.error.unwrap_or_default());
                },
                unexpected => {
                    println!("got unexpected status code, {}", unexpected);
                },
            }
        }
    };
    Ok(())
}
