//! Batch job files
//!
//! A job file lists the research targets of a batch run, in TOML
//! (`[[jobs]]` tables) or JSON (either a bare array or `{"jobs": [...]}`).
//! Per-job language and result limit are optional and fall back to the
//! configured research defaults.

use research_application::ResearchParams;
use research_domain::{JobSpec, ResearchRequest};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading a job file
#[derive(Error, Debug)]
pub enum JobFileError {
    #[error("Failed to read job file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON job file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML job file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported job file extension '{0}' (expected .toml or .json)")]
    UnsupportedFormat(String),
}

/// One job entry as written in the file
#[derive(Debug, Clone, Deserialize)]
pub struct FileJob {
    pub gene_symbol: String,
    pub organism: String,
    #[serde(default)]
    pub research_focus: Vec<String>,
    #[serde(default)]
    pub specific_aspects: Vec<String>,
    pub disease_context: Option<String>,
    pub experimental_approach: Option<String>,
    pub user_prompt: Option<String>,
    pub language: Option<String>,
    pub max_result: Option<u32>,
    /// Label used in progress and summary output (defaults to the gene symbol)
    pub key: Option<String>,
}

impl FileJob {
    pub fn into_job(self, defaults: &ResearchParams) -> JobSpec {
        let mut request = defaults
            .request(self.gene_symbol, self.organism)
            .with_focus(self.research_focus)
            .with_aspects(self.specific_aspects);
        if let Some(context) = self.disease_context {
            request = request.with_disease_context(context);
        }
        if let Some(approach) = self.experimental_approach {
            request = request.with_experimental_approach(approach);
        }
        if let Some(prompt) = self.user_prompt {
            request = request.with_user_prompt(prompt);
        }
        if let Some(language) = self.language {
            request = request.with_language(language);
        }
        if let Some(max_result) = self.max_result {
            request = request.with_max_result(max_result);
        }

        match self.key {
            Some(key) => JobSpec::with_display_key(request, key),
            None => JobSpec::new(request),
        }
    }
}

#[derive(Debug, Deserialize)]
struct JobList {
    #[serde(default)]
    jobs: Vec<FileJob>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonJobs {
    Bare(Vec<FileJob>),
    Wrapped(JobList),
}

/// Load jobs from `path`, choosing the format by extension.
pub fn load_jobs(path: &Path, defaults: &ResearchParams) -> Result<Vec<JobSpec>, JobFileError> {
    let contents = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let jobs = match extension.as_str() {
        "toml" => toml::from_str::<JobList>(&contents)?.jobs,
        "json" => match serde_json::from_str::<JsonJobs>(&contents)? {
            JsonJobs::Bare(jobs) => jobs,
            JsonJobs::Wrapped(list) => list.jobs,
        },
        other => return Err(JobFileError::UnsupportedFormat(other.to_string())),
    };

    Ok(jobs.into_iter().map(|job| job.into_job(defaults)).collect())
}

/// Built-in batch used when no job file is given: three *E. coli* genes.
pub fn default_jobs(defaults: &ResearchParams) -> Vec<JobSpec> {
    [
        ("talB", ["molecular_function", "metabolic_pathways"]),
        ("lysC", ["enzyme_kinetics", "regulation"]),
        ("thrB", ["protein_structure", "allosteric_regulation"]),
    ]
    .into_iter()
    .map(|(gene, focus)| {
        let request: ResearchRequest = defaults
            .request(gene, "Escherichia coli")
            .with_focus(focus);
        JobSpec::new(request)
    })
    .collect()
}
