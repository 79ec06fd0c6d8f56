use super::args::Cli;
use crate::exit_codes;
use std::sync::Arc;
use std::time::Duration;
use storecheck_core::checklist::ChecklistKind;
use storecheck_core::engine::runner::targets_for;
use storecheck_core::engine::Runner;
use storecheck_core::providers::http::HttpAgentClient;
use storecheck_core::report::{console, progress, Reporter};

pub(crate) async fn run(cli: Cli) -> anyhow::Result<i32> {
    let client = Arc::new(HttpAgentClient::new(cli.agent_url.clone()));
    let runner = Runner::new(client, Duration::from_secs(cli.timeout));
    let mut reporter = Reporter::new();

    let total = targets_for(&cli.url, &cli.products).len() * ChecklistKind::ALL.len();
    let progress = progress::default_progress_sink(total);
    runner
        .run(&cli.url, &cli.products, &mut reporter, progress)
        .await;

    reporter.persist(&cli.out)?;
    console::print_summary(reporter.results());
    eprintln!("✅ Report saved to {}", cli.out.display());
    Ok(exit_codes::SUCCESS)
}
