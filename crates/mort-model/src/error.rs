use thiserror::Error;

/// Broad category of a [`CodeError`], stable across segment annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeErrorKind {
    /// Input was not text.
    Type,
    /// Text did not match the code or range grammar.
    Format,
    /// Range end precedes its start.
    RangeOrder,
}

/// Errors raised while parsing or expanding ICD-10 codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("expected text, got {found}")]
    Type { found: &'static str },

    #[error("'{input}' is not of the required format")]
    Format { input: String },

    #[error("'{input}' range is backwards")]
    RangeOrder { input: String },

    #[error("invalid segment '{segment}' in '{spec}': {source}")]
    Segment {
        segment: String,
        spec: String,
        #[source]
        source: Box<CodeError>,
    },
}

impl CodeError {
    /// Error category, looking through segment annotations.
    pub fn kind(&self) -> CodeErrorKind {
        match self {
            Self::Type { .. } => CodeErrorKind::Type,
            Self::Format { .. } => CodeErrorKind::Format,
            Self::RangeOrder { .. } => CodeErrorKind::RangeOrder,
            Self::Segment { source, .. } => source.kind(),
        }
    }

    pub(crate) fn format(input: impl Into<String>) -> Self {
        Self::Format {
            input: input.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CodeError>;
