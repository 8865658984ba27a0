//! Remote tool names.
//!
//! Exact casing matters: the server matches these verbatim.

/// Stage 1 of the workflow: produce a research plan from a query.
pub const WRITE_RESEARCH_PLAN: &str = "write-research-plan";

/// Stage 2: turn a plan into a list of search tasks.
pub const GENERATE_SERP_QUERY: &str = "generate-SERP-query";

/// Stage 3: execute search tasks and collect sources.
pub const SEARCH_TASK: &str = "search-task";

/// Stage 4: synthesise the final report from plan and completed tasks.
pub const WRITE_FINAL_REPORT: &str = "write-final-report";

/// Composite tool that runs the whole workflow server-side in one call.
pub const GENE_RESEARCH: &str = "gene-research";
