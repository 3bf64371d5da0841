use thiserror::Error;

/// Why a proposed connection was refused by the graph validator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeRejection {
    #[error("a node cannot connect to itself")]
    SelfLoop,

    #[error("this connection already exists")]
    Duplicate,

    #[error("this connection would create a cycle")]
    Cycle,
}

/// Errors raised while editing a pipeline graph.
///
/// None of these leave the graph in a modified state: a failed edit is simply discarded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Connection from '{source_id}' to '{target_id}' was rejected: {reason}")]
    Rejected {
        source_id: String,
        target_id: String,
        reason: EdgeRejection,
    },

    #[error("Node '{0}' not found in the pipeline graph")]
    NodeNotFound(String),

    #[error("Node id '{0}' is already used in the pipeline graph")]
    DuplicateNode(String),
}

impl GraphError {
    /// The classified rejection, if this error came from the connection validator.
    pub fn rejection(&self) -> Option<EdgeRejection> {
        match self {
            GraphError::Rejected { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

/// Errors that can occur when submitting a script to the execution service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("Execution request failed: {0}")]
    Transport(String),

    #[error("Execution service responded with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Execution service reported an error: {0}")]
    Remote(String),

    #[error("Execution response was malformed: {0}")]
    MalformedResponse(String),
}

impl ExecutionError {
    /// The fixed message shown to users for every execution failure.
    pub const USER_MESSAGE: &'static str = "An error occurred while executing the code.";

    pub fn user_message(&self) -> &'static str {
        Self::USER_MESSAGE
    }
}

/// Errors that can occur while reading or writing the graph JSON format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("Failed to parse pipeline JSON: {0}")]
    JsonParseError(String),

    #[error("Failed to serialize pipeline: {0}")]
    SerializeError(String),

    #[error("Pipeline file error: {0}")]
    Io(String),

    #[error("Pipeline graph is invalid: {0}")]
    Graph(#[from] GraphError),

    #[error("Pipeline conversion failed: {0}")]
    Conversion(#[from] ConversionError),
}

/// Errors that can occur when converting a custom user format into a `PipelineDocument`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors raised while loading configuration or installing the log subscriber.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}
