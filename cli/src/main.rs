//! CLI entrypoint for consilium
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use consilium_application::{
    Agent, BehaviorConfig, ClientInfoAgent, CompositeProgress, DialogueManager, FinancialAgent,
    MarketAgent, Orchestrator, ProgressNotifier, StrategyAgent,
};
use consilium_domain::{ClientProfile, ProjectData, ProjectInfo};
use consilium_infrastructure::{ConfigLoader, FileConfig, JsonlRunLog, OpenAiGateway};
use consilium_presentation::{Cli, ConsoleFormatter, ProgressReporter, sample_project};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting consilium");

    // Configuration
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    let behavior = config.behavior();

    let mut project_data = build_project_data(&cli)?;

    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|        consilium - マルチエージェント戦略分析              |");
        println!("+============================================================+");
        println!();
        println!("クライアント: {}", project_data.client_name);
        println!("業界: {}", project_data.industry);
        println!("課題: {}", project_data.challenge);
        println!();
    }

    // === Dependency Injection ===
    let gateway = Arc::new(OpenAiGateway::new(config.gateway_config()?)?);

    // Optional prefetch: fill missing buckets from the model
    if cli.fetch {
        prefetch_client_info(&cli, &gateway, &behavior, &mut project_data).await?;
    }

    let agents: Vec<Arc<dyn Agent>> = vec![
        Arc::new(MarketAgent::new()),
        Arc::new(FinancialAgent::new()),
        Arc::new(StrategyAgent::new(Arc::clone(&gateway), behavior.clone())),
    ];

    let mut orchestrator = Orchestrator::new(agents);
    if config.dialogue.enabled && !cli.no_dialogue {
        orchestrator = orchestrator
            .with_dialogue(DialogueManager::new(Arc::clone(&gateway), behavior.clone()));
    }

    // Progress side channel: console bars and/or the JSONL run log
    let reporter = (!cli.quiet).then(ProgressReporter::new);
    let run_log = cli.log_file.as_ref().and_then(JsonlRunLog::new);
    let mut delegates: Vec<&dyn ProgressNotifier> = Vec::new();
    if let Some(reporter) = &reporter {
        delegates.push(reporter);
    }
    if let Some(run_log) = &run_log {
        delegates.push(run_log);
    }
    let progress = CompositeProgress::new(delegates);

    let outcome = orchestrator
        .run_with_progress(project_data, &progress)
        .await;

    println!("{}", ConsoleFormatter::format(&outcome, cli.format));

    if let Some(path) = &cli.output {
        std::fs::write(path, &outcome.report)
            .with_context(|| format!("レポートを保存できませんでした: {}", path.display()))?;
        if !cli.quiet {
            println!("✓ レポートを保存しました: {}", path.display());
        }
    }
    if let Some(run_log) = &run_log
        && !cli.quiet
    {
        println!("✓ 実行ログ: {}", run_log.path().display());
    }

    Ok(())
}

/// Assemble the project snapshot from CLI inputs and the data file.
fn build_project_data(cli: &Cli) -> Result<ProjectData> {
    if cli.sample {
        return Ok(sample_project());
    }

    let (Some(client), Some(industry), Some(challenge)) =
        (&cli.client, &cli.industry, &cli.challenge)
    else {
        bail!("--client, --industry, --challenge を指定してください（または --sample）");
    };

    let mut data = ProjectData::new(ProjectInfo::new(client, industry, challenge));

    if let Some(path) = &cli.data_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("データファイルを読み込めませんでした: {}", path.display()))?;
        let buckets: ClientProfile = serde_json::from_str(&text)
            .with_context(|| format!("データファイルの形式が不正です: {}", path.display()))?;
        buckets.merge_into(&mut data);
        info!("loaded data file {}", path.display());
    }

    Ok(data)
}

/// Fetch missing buckets via the client-info agent before the run.
///
/// A fetch failure is reported but never aborts the analysis; the run
/// continues with whatever data is already present.
async fn prefetch_client_info(
    cli: &Cli,
    gateway: &Arc<OpenAiGateway>,
    behavior: &BehaviorConfig,
    project_data: &mut ProjectData,
) -> Result<()> {
    if !cli.quiet {
        println!("クライアント情報を取得しています...");
    }

    let agent = ClientInfoAgent::new(Arc::clone(gateway), behavior.clone());
    match agent.fetch_profile(&project_data.info()).await {
        Ok(profile) => {
            if let Some(path) = &cli.save_data {
                let json = serde_json::to_string_pretty(&profile)?;
                std::fs::write(path, json)
                    .with_context(|| format!("データを保存できませんでした: {}", path.display()))?;
                if !cli.quiet {
                    println!("✓ データを保存しました: {}", path.display());
                }
            }
            profile.merge_into(project_data);
            if !cli.quiet {
                println!("✓ クライアント情報を取得しました");
            }
        }
        Err(e) => {
            eprintln!("⚠ クライアント情報の取得に失敗しました: {e}");
            eprintln!("基本情報のみで分析を続行します...");
        }
    }

    Ok(())
}
