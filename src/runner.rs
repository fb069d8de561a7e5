//! File-to-file analysis pipeline

use std::fs;

use anyhow::Context;
use mobility_engine::Mobility;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{InputError, InputResult};
use crate::parser::parse_board;
use crate::report::{render, render_error, PieceReport};

/// What ended up in the output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Results for this many pieces were written
    Analyzed(usize),
    /// The description was rejected and the message was written
    Rejected(InputError),
}

/// Parse a description and query every piece, in input order
pub fn analyze_text(text: &str) -> InputResult<Vec<PieceReport>> {
    let parsed = parse_board(text)?;
    info!(
        size = parsed.board.size().get(),
        pieces = parsed.pieces.len(),
        "analyzing board"
    );

    let reports = parsed
        .pieces
        .iter()
        .map(|piece| {
            let mobility: Mobility = parsed.board.mobility(piece);
            debug!(%piece, moves = mobility.moves, captures = mobility.captures, "queried piece");
            PieceReport::new(piece, mobility)
        })
        .collect();
    Ok(reports)
}

/// Read `config.input`, analyze it and write `config.output`
///
/// A rejected description is not an error here: its message is written to
/// the output file and reported as [`Outcome::Rejected`].
///
/// # Errors
///
/// Fails only if the output cannot be rendered or written.
pub fn run(config: &Config) -> anyhow::Result<Outcome> {
    let analysis = match fs::read_to_string(&config.input) {
        Ok(text) => analyze_text(&text),
        Err(err) => {
            warn!(path = %config.input.display(), %err, "cannot read input");
            Err(InputError::Malformed)
        }
    };

    let (contents, outcome) = match analysis {
        Ok(reports) => (
            render(config.format, &reports)?,
            Outcome::Analyzed(reports.len()),
        ),
        Err(err) => {
            warn!(%err, "board description rejected");
            (render_error(config.format, err)?, Outcome::Rejected(err))
        }
    };

    fs::write(&config.output, contents)
        .with_context(|| format!("failed to write {}", config.output.display()))?;
    Ok(outcome)
}
