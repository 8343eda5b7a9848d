mod sample;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use router_client::chatstate::ChatState;
use router_client::wire::ChatStateReply;
use router_client::{Client, ClientError};

#[derive(Parser, Debug)]
#[clap(about = "Posts a sample ChatState document to the router and prints the reply")]
struct Args {
    #[clap(long, default_value = "https://deepresearcher-6ro6.onrender.com")]
    server_url: String,
    /// Must exceed the router's delay for the reply to arrive
    #[clap(long, default_value = "30")]
    timeout_secs: u64,
}

const RULE_WIDTH: usize = 50;

fn success_report(reply: &ChatStateReply) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "\n{rule}\nSUCCESS! Response received:\n{rule}\nStatus: {}\nMessage: {}\nTimestamp: {}\n\nSummary:\n{}\n{rule}",
        reply.status, reply.message, reply.timestamp, reply.summary
    )
}

fn failure_report(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ClientError>() {
        Some(ClientError::Status { status, body }) => {
            format!("Error: HTTP {}\nResponse: {}", status.as_u16(), body)
        }
        Some(ClientError::Timeout) => {
            "Request timed out - this is expected due to the 20-second delay".to_string()
        }
        _ => format!("Error sending request: {err}"),
    }
}

async fn send(args: &Args, state: &ChatState) -> Result<ChatStateReply> {
    let client = Client::new(&args.server_url, Duration::from_secs(args.timeout_secs))?;

    println!("Sending ChatState data to Render...");
    println!("URL: {}", client.endpoint("chatstate"));
    println!("Data size: {} characters", serde_json::to_string(state)?.len());

    Ok(client.chatstate(state).await?)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    tracing::info!("args: {:?}", &args);

    // Every outcome is reported on stdout; none of them fails the process.
    match send(&args, &sample::fitness_app()).await {
        Ok(reply) => println!("{}", success_report(&reply)),
        Err(e) => {
            tracing::warn!("request failed: {:?}", e);
            println!("{}", failure_report(&e));
        }
    }
}
