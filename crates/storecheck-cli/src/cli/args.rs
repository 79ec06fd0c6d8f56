use clap::Parser;
use std::path::PathBuf;
use storecheck_core::providers::http::DEFAULT_AGENT_URL;

#[derive(Parser, Debug)]
#[command(
    name = "storecheck",
    version,
    about = "Agent-driven QA for ecommerce product pages — structured JSON reports from browser-agent runs"
)]
pub struct Cli {
    /// Base store URL
    #[arg(long)]
    pub url: String,

    /// Product paths appended to the base URL (e.g. /products/demo-product)
    #[arg(long, num_args = 0..)]
    pub products: Vec<String>,

    /// Timeout per agent invocation (seconds)
    #[arg(long, default_value_t = 180)]
    pub timeout: u64,

    /// Output JSON report path
    #[arg(long, default_value = "report.json")]
    pub out: PathBuf,

    /// Browser-agent service endpoint
    #[arg(long, env = "STORECHECK_AGENT_URL", default_value = DEFAULT_AGENT_URL)]
    pub agent_url: String,
}
