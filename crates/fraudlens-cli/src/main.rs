use anyhow::{Context, Result};
use clap::Parser;
use fraudlens_analytics::{
    graph_stats, pattern_label, risk_chip, scale_graph, score_tier, to_report, REPORT_FILENAME,
};
use fraudlens_client::RequestLifecycleManager;
use fraudlens_core::{AnalysisResultStore, ClientLimits, RenderBudget};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "fraudlens")]
#[command(about = "Submit a transaction CSV for fraud analysis and inspect the results", long_about = None)]
#[command(version)]
struct Cli {
    /// Transaction CSV to analyze
    csv: PathBuf,

    /// Analysis endpoint URL
    #[arg(long, env = "FRAUDLENS_ENDPOINT", default_value = "http://localhost:5000/analyze")]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Maximum nodes in the rendered selection
    #[arg(long, default_value_t = 420)]
    max_nodes: usize,

    /// Maximum edges in the rendered selection
    #[arg(long, default_value_t = 2200)]
    max_edges: usize,

    /// Write the export report to this path instead of the default filename
    #[arg(long)]
    report: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let limits = ClientLimits {
        endpoint: cli.endpoint.clone(),
        request_timeout_secs: cli.timeout,
        ..Default::default()
    };
    let budget = RenderBudget {
        max_nodes: cli.max_nodes,
        max_edges: cli.max_edges,
        ..Default::default()
    };

    let store = Arc::new(AnalysisResultStore::new());
    let manager = RequestLifecycleManager::new(limits, store.clone())
        .context("failed to build analysis client")?;

    let result = match manager.submit(&cli.csv).await {
        Ok(result) => result,
        Err(err) => {
            if err.is_retryable() {
                eprintln!("This failure is safe to retry; check connectivity or reduce the input size.");
            }
            return Err(anyhow::Error::new(err)
                .context(format!("analysis of {} failed", cli.csv.display())));
        }
    };

    let stats = graph_stats(&result.nodes, &result.edges);
    println!("Accounts analyzed:       {}", stats.node_count);
    println!("Aggregated transfers:    {}", stats.edge_count);
    println!("Average degree:          {:.2}", stats.average_degree);
    println!("Largest component:       {}", stats.largest_component_size);
    println!(
        "Processing time:         {:.2}s",
        result.summary_stats.processing_time_seconds
    );

    let scaled = scale_graph(&result.nodes, &result.edges, &budget);
    println!(
        "Render selection:        {} of {} nodes, {} of {} edges{}",
        scaled.nodes.len(),
        result.nodes.len(),
        scaled.edges.len(),
        result.edges.len(),
        if scaled.is_large { " (large)" } else { "" }
    );

    if !result.suspicious_accounts.is_empty() {
        println!("\nSuspicious accounts:");
        for account in &result.suspicious_accounts {
            let patterns: Vec<String> =
                account.patterns.iter().map(|p| pattern_label(p)).collect();
            println!(
                "  {:<20} score {:>5.1} [{}] {}",
                account.account_id,
                account.score(),
                score_tier(account.suspicion_score),
                patterns.join(", ")
            );
        }
    }

    if !result.fraud_rings.is_empty() {
        println!("\nFraud rings:");
        for ring in &result.fraud_rings {
            println!(
                "  {:<12} {:>3} members, risk {:>5.1} [{}] {}",
                ring.ring_id,
                ring.member_count,
                ring.risk(),
                risk_chip(ring.risk_score),
                ring.pattern_type
            );
        }
    }

    let report_path = cli
        .report
        .unwrap_or_else(|| PathBuf::from(REPORT_FILENAME));
    let report = to_report(&result);
    std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("failed to write report to {}", report_path.display()))?;
    println!("\nReport written to {}", report_path.display());

    Ok(())
}
