use ascii_chess_core::BoardError;

/// Errors that abort a render. No partial text is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Style geometry or frame artwork does not fit the board being drawn.
    #[error("invalid render configuration: {reason}")]
    Configuration { reason: String },

    /// A renderer was built without one of its required parts.
    #[error("missing {name} for renderer")]
    MissingCollaborator { name: &'static str },

    /// A board query was made outside the board. Indicates a defect upstream.
    #[error(transparent)]
    Bounds(#[from] BoardError),
}

impl RenderError {
    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        RenderError::Configuration {
            reason: reason.into(),
        }
    }
}
