use thiserror::Error;

/// Internal issues with the codebase or its infrastructure indicating unexpected behavior
#[derive(Error, Debug)]
pub enum InternalError {
    /// Password hashing failed.
    ///
    /// The plaintext is never included in the message.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Signing a token failed.
    #[error("Failed to encode token: {0}")]
    TokenEncode(#[from] jsonwebtoken::errors::Error),

    /// An entity disappeared between a write and the read that followed it.
    #[error("{entity} {id} missing after write")]
    MissingAfterWrite { entity: &'static str, id: i32 },

    /// A task on the blocking thread pool panicked or was cancelled.
    #[error("Blocking task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),

    /// Binding or serving the HTTP listener failed.
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
