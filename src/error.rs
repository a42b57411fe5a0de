/// Result alias that carries the crate's [`StudioError`] type.
pub type Result<T> = std::result::Result<T, StudioError>;

/// Common error type for the application.
#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    #[error("invalid hex color `{0}` (expected #rgb or #rrggbb)")]
    InvalidColor(String),
}
