//! Theme errors.

/// Errors produced by theme storage and surface adapters.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A stored or supplied value is not one of the known theme literals.
    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),

    /// The host refused access to its durable store.
    #[error("preference storage unavailable")]
    StorageUnavailable,

    /// A read or write against the durable store failed.
    #[error("preference storage failed: {0}")]
    Storage(String),

    /// A required DOM element could not be found.
    #[error("missing element: {0}")]
    ElementMissing(String),

    /// A class list or text update on a DOM element failed.
    #[error("DOM update failed: {0}")]
    Dom(String),

    /// Theme configuration could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),
}
