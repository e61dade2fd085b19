//! JSON API for host UIs.
//!
//! String-in/string-out entry points over the summary and tally
//! operations. Requests and responses carry a `schema_version` field.
//! Responses are presentation-ready (summary rows sorted by descending
//! size, tally rows annotated with prize labels) so the engine itself
//! stays free of ordering and labeling policy.

use serde::{Deserialize, Serialize};

use crate::engine::{compare_games, summarize_game_sizes, tiers};
use crate::models::Game;
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub schema_version: u8,
    pub games: Vec<Game>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub schema_version: u8,
    pub total_games: usize,
    pub sizes: Vec<SizeRow>,
}

#[derive(Debug, Serialize)]
pub struct SizeRow {
    pub size: usize,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub schema_version: u8,
    pub games: Vec<Game>,
    /// Drawn numbers as free-form comma/space separated text.
    pub drawn: String,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub schema_version: u8,
    pub tally: Vec<TierRow>,
}

#[derive(Debug, Serialize)]
pub struct TierRow {
    pub tier: usize,
    pub count: usize,
    /// Prize tier label when one exists (e.g. 6 -> "Sena").
    pub label: Option<String>,
}

fn check_schema_version(found: u8) -> Result<(), String> {
    if found != SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {found}"));
    }
    Ok(())
}

/// Summarize a game collection by entry size.
pub fn size_summary_json(request_json: &str) -> Result<String, String> {
    let request: SummaryRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {e}"))?;
    check_schema_version(request.schema_version)?;

    let summary = summarize_game_sizes(&request.games);

    let mut sizes: Vec<SizeRow> =
        summary.into_iter().map(|(size, count)| SizeRow { size, count }).collect();
    sizes.sort_by(|a, b| b.size.cmp(&a.size));

    let response = SummaryResponse {
        schema_version: SCHEMA_VERSION,
        total_games: request.games.len(),
        sizes,
    };

    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {e}"))
}

/// Compare a game collection against drawn-number text.
pub fn compare_result_json(request_json: &str) -> Result<String, String> {
    let request: CompareRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {e}"))?;
    check_schema_version(request.schema_version)?;

    let tally = compare_games(&request.games, &request.drawn);

    let response = CompareResponse {
        schema_version: SCHEMA_VERSION,
        tally: tally
            .into_iter()
            .map(|(tier, count)| TierRow {
                tier,
                count,
                label: tiers::label(tier).map(str::to_string),
            })
            .collect(),
    };

    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {e}"))
}
