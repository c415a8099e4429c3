//! Session boundary: one decoded request in, one encoded reply out.
//!
//! The surrounding transport (socket accept loop, handshake, framing,
//! per-connection lifecycle) is an external collaborator; this module
//! only defines the message contract and the decode → solve → encode
//! step for a single frame. Every failure is turned into a structured
//! error reply so a bad request can never take the serving process
//! down with it.

use crate::aco::{AcoConfig, AcoRunner, TspInstance};
use crate::error::AcoResult;
use serde::{Deserialize, Serialize};

/// One decoded solve request.
#[derive(Debug, Clone, Deserialize)]
pub struct SolveRequest {
    /// n×n distance matrix.
    pub data: Vec<Vec<f64>>,
    /// Pheromone influence exponent.
    pub alpha: f64,
    /// Heuristic influence exponent.
    pub beta: f64,
    /// Evaporation rate.
    pub rho: f64,
}

/// One encoded reply, tagged by payload kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum SolveResponse {
    /// A solved tour: n+1 city indices, first repeated last.
    Path(Vec<usize>),
    /// A rejected or failed solve, with a human-readable reason.
    Error(String),
}

/// Runs one request through the solver.
///
/// Uses the default iteration budget; the request carries only the
/// matrix and the three heuristic parameters.
pub fn solve_request(request: &SolveRequest) -> AcoResult<Vec<usize>> {
    let instance = TspInstance::new(request.data.clone())?;
    let config = AcoConfig::default()
        .with_alpha(request.alpha)
        .with_beta(request.beta)
        .with_rho(request.rho);
    let solution = AcoRunner::run(&instance, &config)?;
    Ok(solution.best.path)
}

/// Decodes one JSON frame, solves it, and encodes the reply.
///
/// Malformed JSON and solver rejections both come back as an `error`
/// reply rather than an `Err`, so the caller can write the result to
/// the client unconditionally.
pub fn handle_message(frame: &str) -> String {
    let response = match serde_json::from_str::<SolveRequest>(frame) {
        Ok(request) => match solve_request(&request) {
            Ok(path) => SolveResponse::Path(path),
            Err(err) => SolveResponse::Error(err.to_string()),
        },
        Err(err) => SolveResponse::Error(format!("malformed request: {err}")),
    };

    // Serializing an owned enum of plain values cannot fail.
    serde_json::to_string(&response).expect("response serialization")
}
