//! Line-oriented `name: value` parameter grammar (§6), shared by the
//! interactive console host and file-based configuration. Each field lives
//! on its own line; parsing skips to (and past) the first `:` on the line
//! and trims the remainder.
//!
//! This module owns parsing only — the interactive prompt loop itself, and
//! the external image viewer invocation, are out of scope (§1: external
//! collaborators). A host drives these functions with whatever lines it
//! collects from stdin or a file.

use std::io::BufRead;

use crate::error::{Result, SnowfakeError};
use crate::parameters::Parameters;

/// The field order the original console prompt asks for, in order.
pub const FIELD_ORDER: [&str; 17] = [
    "rho", "h", "p", "beta", "alpha", "theta", "kappa", "mu", "gamma", "sigma", "L", "zoom",
    "infile", "outfile", "graphicsfile", "viewer", "comments",
];

/// A fully parsed parameter session: the dynamics `Parameters` plus the
/// free-form fields a host needs but the engine does not (file names, the
/// viewer command, a comment line).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptSession {
    pub params: Parameters,
    pub infile: Option<String>,
    pub outfile: Option<String>,
    pub graphicsfile: Option<String>,
    pub viewer: Option<String>,
    pub comments: Option<String>,
}

/// Strips everything up to and including the first `:`, then trims
/// whitespace from the remainder. Returns `None` if the line has no `:`.
fn value_after_colon(line: &str) -> Option<&str> {
    line.split_once(':').map(|(_, rest)| rest.trim())
}

fn malformed(field: &'static str, reason: impl Into<String>) -> SnowfakeError {
    SnowfakeError::ParameterInvalid { field, reason: reason.into() }
}

fn parse_f64_field(value: &str, field: &'static str) -> Result<f64> {
    value.parse().map_err(|_| malformed(field, format!("`{value}` is not a number")))
}

/// Parses a stream of `name: value` lines (interactive or file-sourced)
/// into a [`PromptSession`]. Unrecognized lines are ignored, matching the
/// original's tolerance for stray comments between fields; a line naming a
/// known field with an unparseable value is rejected.
pub fn read_parameters(lines: impl BufRead) -> Result<PromptSession> {
    let mut session = PromptSession::default();
    let mut params = Parameters::default();

    for line in lines.lines() {
        let line = line.map_err(SnowfakeError::Io)?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let Some((name, _)) = trimmed.split_once(':') else {
            continue;
        };
        let name = name.trim();
        let Some(value) = value_after_colon(trimmed) else {
            continue;
        };

        match name {
            "rho" => params.rho = parse_f64_field(value, "rho")?,
            "h" => params.h = value.parse().map_err(|_| malformed("h", format!("`{value}` is not an integer")))?,
            "p" => params.p = parse_f64_field(value, "p")?,
            "beta" => params.beta = parse_f64_field(value, "beta")?,
            "alpha" => params.alpha = parse_f64_field(value, "alpha")?,
            "theta" => params.theta = parse_f64_field(value, "theta")?,
            "kappa" => params.kappa = parse_f64_field(value, "kappa")?,
            "mu" => params.mu = parse_f64_field(value, "mu")?,
            "gamma" => params.gamma = parse_f64_field(value, "gamma")?,
            "sigma" => params.sigma = parse_f64_field(value, "sigma")?,
            "L" => params.l = value.parse().map_err(|_| malformed("L", format!("`{value}` is not an integer")))?,
            "zoom" => params.zoom = value.parse().map_err(|_| malformed("zoom", format!("`{value}` is not an integer")))?,
            "infile" => session.infile = Some(value.to_string()),
            "outfile" => session.outfile = Some(value.to_string()),
            "graphicsfile" => session.graphicsfile = Some(value.to_string()),
            "viewer" => session.viewer = Some(value.to_string()),
            "comments" => session.comments = Some(value.to_string()),
            _ => {}
        }
    }

    session.params = params;
    Ok(session)
}
