//! Food Calculator
//!
//! An MCP server that scales per-person food norms to a headcount.

use food_calc::build_info;
use food_calc::mcp::FoodCalcService;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays free for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("food_calc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let service = FoodCalcService::new();

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
