use std::fmt;

/// Failure classes of a seeding run. None of them is retried: the run is
/// aborted and the next invocation starts again from empty collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Store unreachable, drop or insert failed
    Connectivity,
    /// Requested population cannot satisfy the generation constraints
    Constraint,
    /// A generated document or the configuration failed validation
    Validation,
    Internal,
}

#[derive(Debug)]
pub struct SeedError {
    kind: ErrorKind,
    message: &'static str,
    details: Option<String>,
}

impl SeedError {
    pub fn new(kind: ErrorKind, message: &'static str) -> Self {
        Self {
            kind,
            message,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    // Common error constructors
    pub fn connectivity(message: &'static str) -> Self {
        Self::new(ErrorKind::Connectivity, message)
    }

    pub fn constraint(message: &'static str) -> Self {
        Self::new(ErrorKind::Constraint, message)
    }

    pub fn validation(message: &'static str) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn internal(message: &'static str) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{:?} error: {} ({})", self.kind, self.message, details),
            None => write!(f, "{:?} error: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for SeedError {}

impl From<mongodb::error::Error> for SeedError {
    fn from(err: mongodb::error::Error) -> Self {
        match *err.kind {
            mongodb::error::ErrorKind::BsonSerialization(_)
            | mongodb::error::ErrorKind::BsonDeserialization(_) => {
                Self::internal("Document encoding failed").with_details(err.to_string())
            }
            _ => Self::connectivity("Document store unavailable").with_details(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for SeedError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::validation("Validation error").with_details(err.to_string())
    }
}
