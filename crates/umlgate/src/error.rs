//! Error types for umlgate operations.
//!
//! [`UmlGateError`] wraps everything that can go wrong while loading rules
//! or committing an edge to a diagram.

use std::io;

use thiserror::Error;

use umlgate_core::model::ModelError;

use crate::{config::ConfigError, constraint::Violation};

/// The main error type for umlgate operations.
///
/// A rule rejection is reported as [`UmlGateError::Rejected`] and names the
/// violated rule. Structural problems with the diagram itself, such as an
/// unknown node, come through as [`UmlGateError::Model`].
#[derive(Debug, Error)]
pub enum UmlGateError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error(transparent)]
    Rejected(#[from] Violation),
}

impl UmlGateError {
    /// Returns the violation if this error is a rule rejection.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Self::Rejected(violation) => Some(violation),
            _ => None,
        }
    }
}
