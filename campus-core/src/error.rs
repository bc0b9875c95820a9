//! Content loading and validation errors.

use thiserror::Error;

/// Failure to load or validate site content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("read content file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse content TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize content: {0}")]
    Serialize(String),

    #[error("duplicate id {id:?} in {list}")]
    DuplicateId { list: &'static str, id: String },

    #[error("{list} entry {id:?} references unknown category {category:?}")]
    UnknownCategory {
        list: &'static str,
        id: String,
        category: String,
    },

    #[error("{list} must not be empty")]
    Empty { list: &'static str },
}

/// Failure to persist a preference through a [`crate::theme::ThemeStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("store encode: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme {0:?} (expected \"light\" or \"dark\")")]
pub struct UnknownTheme(pub String);
