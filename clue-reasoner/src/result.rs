use std::fmt::Display;

use clue_cnf::dimacs::DimacsParseError;
use thiserror::Error;

use crate::config::ConfigError;

pub type ReasonerResult<T> = Result<T, ReasonerError>;

#[derive(Error, Debug)]
pub enum ReasonerError {
    /// A name or id outside the closed sets fixed by the [`crate::GameConfig`].
    #[error("'{name}' is not a known {kind}")]
    InvalidIdentifier { kind: IdentifierKind, name: String },

    #[error("invalid {event}: {reason}")]
    InvalidEvent { event: EventKind, reason: String },

    #[error("the knowledge base mentions variable {variable}, but the game only has {num_variables}")]
    ForeignKnowledgeBase { variable: u32, num_variables: u32 },

    #[error("invalid game configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to read the knowledge base: {0}")]
    Dimacs(#[from] DimacsParseError),

    #[error("IO error, more details: {0}")]
    Io(#[from] std::io::Error),
}

impl ReasonerError {
    pub(crate) fn invalid_identifier(kind: IdentifierKind, name: impl Display) -> Self {
        ReasonerError::InvalidIdentifier {
            kind,
            name: name.to_string(),
        }
    }

    pub(crate) fn invalid_event(event: EventKind, reason: impl Into<String>) -> Self {
        ReasonerError::InvalidEvent {
            event,
            reason: reason.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    Player,
    Card,
    Holder,
}

impl Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            IdentifierKind::Player => "player",
            IdentifierKind::Card => "card",
            IdentifierKind::Holder => "holder",
        };

        write!(f, "{kind}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Hand,
    Suggestion,
    Accusation,
}

impl Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let event = match self {
            EventKind::Hand => "hand",
            EventKind::Suggestion => "suggestion",
            EventKind::Accusation => "accusation",
        };

        write!(f, "{event}")
    }
}
