//! CLI entrypoint for deep-research
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use research_application::{
    ConductResearchUseCase, NoProgress, ProgressNotifier, ResearchParams, RunBatchUseCase,
    RunWorkflowInput, RunWorkflowUseCase, TokioCooldown, ToolGateway,
};
use research_domain::{BatchSummary, JobSpec, ResearchRequest};
use research_infrastructure::{
    ConfigLoader, FileConfig, FileReportStore, HttpToolClient, default_jobs, load_jobs,
};
use research_presentation::{
    ArtifactCollector, Cli, Command, ConsoleFormatter, OutputFormat, ProgressReporter,
    SimpleProgress,
};
use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
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
        .with_writer(std::io::stderr)
        .init();

    info!("Starting deep-research");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .context("Failed to load configuration")?;

    apply_color_preference(config.output.color);

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!();
        println!("{}", config.to_toml()?);
        return Ok(());
    }

    let Some(command) = cli.command.clone() else {
        bail!("No command given. Run `deep-research --help` for usage.");
    };

    let params = research_params(&cli, &config);

    // === Dependency Injection ===
    let client_config = config.server.to_client_config();
    info!(
        "Tool server: {} (timeout {}s)",
        client_config.endpoint,
        client_config.timeout.as_secs()
    );
    let gateway: Arc<dyn ToolGateway> = Arc::new(HttpToolClient::new(client_config)?);

    let progress = progress_for(&cli);

    match command {
        Command::Research {
            gene,
            organism,
            focus,
            aspect,
            disease,
            approach,
            prompt,
            no_save,
        } => {
            let mut request = params
                .request(gene, organism)
                .with_focus(focus)
                .with_aspects(aspect);
            if let Some(disease) = disease {
                request = request.with_disease_context(disease);
            }
            if let Some(approach) = approach {
                request = request.with_experimental_approach(approach);
            }
            if let Some(prompt) = prompt {
                request = request.with_user_prompt(prompt);
            }

            let mut use_case = ConductResearchUseCase::new(gateway);
            if !no_save {
                use_case = use_case.with_report_store(
                    Arc::new(FileReportStore::new(&config.output.dir)),
                    config.output.save_data,
                );
            }
            run_research(&cli, &use_case, &request, progress.as_ref()).await
        }
        Command::Workflow { query } => {
            let use_case = RunWorkflowUseCase::new(gateway);
            let input = RunWorkflowInput::from_params(query.clone(), &params);
            let result = use_case
                .execute_with_progress(input, progress.as_ref())
                .await?;

            let output = match cli.output {
                OutputFormat::Summary => ConsoleFormatter::format_workflow(&query, &result),
                OutputFormat::Json => ConsoleFormatter::format_json(&result),
            };
            println!("{}", output);
            Ok(())
        }
        Command::Batch { jobs, cooldown } => {
            let jobs = match &jobs {
                Some(path) => load_jobs(path, &params)
                    .with_context(|| format!("Failed to read jobs from {}", path.display()))?,
                None => default_jobs(&params),
            };
            run_batch(&cli, &config, gateway, &jobs, cooldown, progress.as_ref()).await
        }
    }
}

/// `[output] color = false` turns off ANSI styling everywhere
fn apply_color_preference(color: bool) {
    if !color {
        colored::control::set_override(false);
    }
}

/// Research defaults from config, with command-line overrides applied
fn research_params(cli: &Cli, config: &FileConfig) -> ResearchParams {
    let mut params = config.research.to_research_params();
    if let Some(language) = &cli.language {
        params = params.with_language(language.clone());
    }
    if let Some(max_result) = cli.max_result {
        params = params.with_max_result(max_result);
    }
    params
}

/// Pick a progress notifier: bars on a terminal, plain lines otherwise,
/// nothing when quiet or emitting JSON.
fn progress_for(cli: &Cli) -> Box<dyn ProgressNotifier> {
    if cli.quiet || cli.output == OutputFormat::Json {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    }
}

async fn run_research(
    cli: &Cli,
    use_case: &ConductResearchUseCase,
    request: &ResearchRequest,
    progress: &dyn ProgressNotifier,
) -> Result<()> {
    let collector = ArtifactCollector::new(progress);
    let started = Instant::now();
    let result = use_case.execute_with_progress(request, &collector).await?;

    let output = match cli.output {
        OutputFormat::Summary => ConsoleFormatter::format_research(
            &request.gene_symbol,
            &request.organism,
            &result,
            started.elapsed(),
            &collector.paths(),
        ),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };
    println!("{}", output);
    Ok(())
}

async fn run_batch(
    cli: &Cli,
    config: &FileConfig,
    gateway: Arc<dyn ToolGateway>,
    jobs: &[JobSpec],
    cooldown: Option<u64>,
    progress: &dyn ProgressNotifier,
) -> Result<()> {
    let research = ConductResearchUseCase::new(gateway).with_report_store(
        Arc::new(FileReportStore::new(&config.output.dir)),
        config.output.save_data,
    );
    let mut batch_params = config.batch.to_batch_params();
    if let Some(seconds) = cooldown {
        batch_params = batch_params.with_cooldown_secs(seconds);
    }

    let use_case =
        RunBatchUseCase::new(research, Arc::new(TokioCooldown)).with_params(batch_params);
    let outcomes = use_case.execute_with_progress(jobs, progress).await?;

    let summary = BatchSummary::from_outcomes(&outcomes);
    if !summary.all_succeeded() {
        warn!("{} of {} jobs failed", summary.failed, summary.total);
    }

    let output = match cli.output {
        OutputFormat::Summary => ConsoleFormatter::format_batch(&outcomes),
        OutputFormat::Json => ConsoleFormatter::format_json(&outcomes),
    };
    println!("{}", output);
    Ok(())
}
