//! Loader errors.
use thiserror::Error;

/// Why a load stopped before resolving every entry point.
///
/// A failed load is coarse on purpose: a missing entry point never raises an
/// error, it simply stays unresolved on the context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadError {
    #[error("glGetString could not be resolved")]
    MissingGetString,
    #[error("glGetString(GL_VERSION) returned null, is a context current?")]
    MissingVersionString,
    #[error("glGetIntegerv or glGetStringi could not be resolved for a 3.0+ context")]
    MissingExtensionQuery,
    #[error("glGetString(GL_EXTENSIONS) returned null")]
    MissingExtensionString,
    #[error("glGetStringi(GL_EXTENSIONS, {index}) returned null")]
    NullExtensionName { index: u32 },
    #[error("no OpenGL library could be opened, tried: {}", candidates.join(", "))]
    LibraryNotFound { candidates: Vec<String> },
    #[error("{0} is not loaded")]
    MissingCommand(&'static str),
}

/// Result type for loading.
pub type Result<T> = std::result::Result<T, LoadError>;
