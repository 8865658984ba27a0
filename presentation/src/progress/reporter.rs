//! Progress reporting for research execution

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use research_application::{ProgressNotifier, ToolCallError};
use research_domain::{CompositeResult, JobOutcome, JobSpec, ResearchRequest, WorkflowStage};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with spinners and a stage bar
pub struct ProgressReporter {
    multi: MultiProgress,
    /// Spinner for the call currently in flight
    spinner: Mutex<Option<ProgressBar>>,
    /// Bar across the four workflow stages
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            spinner: Mutex::new(None),
            stage_bar: Mutex::new(None),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:20.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_spinner(&self, prefix: String, message: String) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(prefix);
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(120));
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(old) = slot.replace(pb) {
                old.finish_and_clear();
            }
        }
    }

    fn finish_spinner(&self, message: String) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut s| s.take()) {
            pb.finish_with_message(message);
        }
    }

    fn line(&self, text: String) {
        let _ = self.multi.println(text);
    }

    pub fn stage_display_name(stage: WorkflowStage) -> &'static str {
        match stage {
            WorkflowStage::Plan => "Step 1: Research plan",
            WorkflowStage::QueryGeneration => "Step 2: SERP queries",
            WorkflowStage::SearchExecution => "Step 3: Search",
            WorkflowStage::ReportSynthesis => "Step 4: Final report",
        }
    }

    pub fn stage_result(stage: WorkflowStage, size: usize) -> String {
        match stage {
            WorkflowStage::Plan => format!("plan created ({} chars)", size),
            WorkflowStage::QueryGeneration => format!("generated {} search tasks", size),
            WorkflowStage::SearchExecution => format!("collected {} sources", size),
            WorkflowStage::ReportSynthesis => format!("report generated ({} chars)", size),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_research_start(&self, request: &ResearchRequest) {
        self.start_spinner(
            request.gene_symbol.clone(),
            format!("researching in {}", request.organism),
        );
    }

    fn on_research_complete(&self, result: &CompositeResult, elapsed: Duration) {
        self.finish_spinner(format!(
            "{} in {:.1}s ({} sources)",
            "done".green(),
            elapsed.as_secs_f64(),
            result.source_count()
        ));
    }

    fn on_research_failed(&self, error: &ToolCallError) {
        self.finish_spinner(format!("{} {}", "failed:".red(), error));
    }

    fn on_artifact_saved(&self, path: &Path) {
        self.line(format!("  {} {}", "saved".dimmed(), path.display()));
    }

    fn on_stage_start(&self, stage: WorkflowStage) {
        let mut slot = match self.stage_bar.lock() {
            Ok(slot) => slot,
            Err(_) => return,
        };
        let pb = slot.get_or_insert_with(|| {
            let pb = self.multi.add(ProgressBar::new(WorkflowStage::ALL.len() as u64));
            pb.set_style(Self::stage_style());
            pb.enable_steady_tick(Duration::from_millis(120));
            pb
        });
        pb.set_prefix(Self::stage_display_name(stage));
        pb.set_message("running...");
    }

    fn on_stage_complete(&self, stage: WorkflowStage, size: usize) {
        let Ok(mut slot) = self.stage_bar.lock() else {
            return;
        };
        if let Some(pb) = slot.as_ref() {
            pb.inc(1);
            pb.set_message(Self::stage_result(stage, size));
            if stage == WorkflowStage::ReportSynthesis {
                pb.finish_with_message(format!("{}", "workflow complete!".green()));
                slot.take();
            }
        }
    }

    fn on_stage_failed(&self, stage: WorkflowStage, error: &ToolCallError) {
        if let Some(pb) = self.stage_bar.lock().ok().and_then(|mut s| s.take()) {
            pb.abandon_with_message(format!(
                "{} {}: {}",
                "x".red(),
                Self::stage_display_name(stage),
                error
            ));
        }
    }

    fn on_job_start(&self, index: usize, total: usize, job: &JobSpec) {
        self.line(format!(
            "\n[{}/{}] Processing {}...",
            index + 1,
            total,
            job.display_key().bold()
        ));
    }

    fn on_job_complete(&self, _index: usize, _total: usize, outcome: &JobOutcome) {
        if let Some(reason) = outcome.reason() {
            self.line(format!("  {} {}", "x".red(), reason));
        }
    }

    fn on_cooldown(&self, duration: Duration) {
        self.line(format!(
            "  {}",
            format!("Waiting {}s before next request...", duration.as_secs()).dimmed()
        ));
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_research_start(&self, request: &ResearchRequest) {
        println!(
            "{} Researching {} in {}",
            "->".cyan(),
            request.gene_symbol.bold(),
            request.organism
        );
    }

    fn on_research_complete(&self, _result: &CompositeResult, elapsed: Duration) {
        println!(
            "  {} completed in {:.1}s",
            "v".green(),
            elapsed.as_secs_f64()
        );
    }

    fn on_research_failed(&self, error: &ToolCallError) {
        println!("  {} {}", "x".red(), error);
    }

    fn on_artifact_saved(&self, path: &Path) {
        println!("  saved {}", path.display());
    }

    fn on_stage_start(&self, stage: WorkflowStage) {
        println!(
            "{} {}",
            "->".cyan(),
            ProgressReporter::stage_display_name(stage).bold()
        );
    }

    fn on_stage_complete(&self, stage: WorkflowStage, size: usize) {
        println!(
            "  {} {}",
            "v".green(),
            ProgressReporter::stage_result(stage, size)
        );
    }

    fn on_stage_failed(&self, _stage: WorkflowStage, error: &ToolCallError) {
        println!("  {} {}", "x".red(), error);
    }

    fn on_job_start(&self, index: usize, total: usize, job: &JobSpec) {
        println!("\n[{}/{}] Processing {}...", index + 1, total, job.display_key());
    }

    fn on_job_complete(&self, _index: usize, _total: usize, outcome: &JobOutcome) {
        match outcome.reason() {
            Some(reason) => println!("  {} Failed: {}", "x".red(), reason),
            None => println!("  {} Success", "v".green()),
        }
    }

    fn on_cooldown(&self, duration: Duration) {
        println!("Waiting {}s before next request...", duration.as_secs());
    }
}
