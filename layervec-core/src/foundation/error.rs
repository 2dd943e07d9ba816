/// Convenience result type used across layervec.
pub type LayervecResult<T> = Result<T, LayervecError>;

/// Top-level error taxonomy used by conversion APIs.
#[derive(thiserror::Error, Debug)]
pub enum LayervecError {
    /// Invalid user-provided layer data (dimensions, document shape).
    #[error("validation error: {0}")]
    Validation(String),

    /// A source dialect (transform list, matrix object, SVG, color) could not be read.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayervecError {
    /// Build a [`LayervecError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LayervecError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

/// Typed failure returned by input adapters.
///
/// Adapters never panic on malformed input; callers decide on a fallback.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A transform-list call used a function name that is not a transform.
    #[error("unknown transform function '{name}' at byte {offset}")]
    UnknownFunction {
        /// Function name as written.
        name: String,
        /// Byte offset of the name in the input.
        offset: usize,
    },

    /// A transform-list call had an argument count its function does not accept.
    #[error("{name}() takes {expected} arguments, got {got}")]
    ArgCount {
        /// Function name.
        name: String,
        /// Accepted counts, e.g. `"1 or 2"`.
        expected: &'static str,
        /// Count actually supplied.
        got: usize,
    },

    /// A numeric token could not be read.
    #[error("invalid number at byte {offset}")]
    InvalidNumber {
        /// Byte offset of the token.
        offset: usize,
    },

    /// Input ended inside a call or a call was never opened.
    #[error("unexpected input at byte {offset}: {message}")]
    Syntax {
        /// Byte offset where reading stopped.
        offset: usize,
        /// What was expected.
        message: String,
    },

    /// A color string was not hex, rgb()/rgba() or a known color name.
    #[error("invalid color '{0}'")]
    InvalidColor(String),

    /// A structured gradient used an unknown family tag.
    #[error("unknown gradient family '{0}'")]
    UnknownFamily(String),

    /// A matrix coefficient or stop channel was NaN or infinite.
    #[error("non-finite value in {0}")]
    NonFinite(&'static str),

    /// An SVG document could not be read.
    #[error("svg: {0}")]
    Svg(String),
}

impl ParseError {
    pub(crate) fn syntax(offset: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            offset,
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
