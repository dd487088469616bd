use thiserror::Error;

/// Application boundary error: every failure from the layers below is
/// caught here and rendered once as a user-visible message on stderr.
/// No automatic retries; a failed mutation never partially applies to the
/// displayed view.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Core(#[from] tl_core::CoreError),

    #[error("{0}")]
    Store(#[from] tl_store::StoreError),

    #[error("{0}")]
    Auth(#[from] tl_identity::AuthError),

    #[error("Config error: {0}")]
    Config(#[from] tl_config::ConfigError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Error serializing response: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Not signed in. Run `tl login` or `tl register` first.")]
    NotSignedIn,

    #[error("Failed to initialize logger: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
