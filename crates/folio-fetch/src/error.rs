//! Fetch error types.
//!
//! [`FetchError`] carries a semantic [`FetchErrorKind`] plus the locator and
//! backend that produced it, so callers can log one line with full context
//! without caring which backend served the document.

/// Semantic error categories shared by all fetch backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FetchErrorKind {
    /// Document does not exist.
    NotFound,
    /// Backend answered with a non-success HTTP status.
    Status(u16),
    /// Permission denied.
    PermissionDenied,
    /// Locator is empty or escapes the site root.
    InvalidLocator,
    /// Backend could not be reached (connection refused, DNS, TLS).
    Unavailable,
    /// Fetch did not complete in time.
    Timeout,
    /// Other/unknown error category.
    Other,
}

/// Fetch error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct FetchError {
    /// Semantic error category.
    pub kind: FetchErrorKind,
    /// Locator that was being fetched (if known).
    pub locator: Option<String>,
    /// Backend identifier (e.g., "Fs", "Http", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl FetchError {
    /// Create a new fetch error.
    #[must_use]
    pub fn new(kind: FetchErrorKind) -> Self {
        Self {
            kind,
            locator: None,
            backend: None,
            source: None,
        }
    }

    /// Attach locator context.
    #[must_use]
    pub fn with_locator(mut self, locator: impl Into<String>) -> Self {
        self.locator = Some(locator.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error for a locator.
    #[must_use]
    pub fn not_found(locator: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::NotFound).with_locator(locator)
    }

    /// Create an error for a non-success HTTP status.
    #[must_use]
    pub fn status(code: u16, locator: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::Status(code)).with_locator(locator)
    }

    /// Create a timeout error for a locator.
    #[must_use]
    pub fn timeout(locator: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::Timeout).with_locator(locator)
    }

    /// Create a fetch error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, locator: impl Into<String>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => FetchErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => FetchErrorKind::PermissionDenied,
            std::io::ErrorKind::TimedOut => FetchErrorKind::Timeout,
            _ => FetchErrorKind::Other,
        };
        Self::new(kind).with_locator(locator).with_source(err)
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (locator: content/home.yml)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        match self.kind {
            FetchErrorKind::NotFound => write!(f, "Not found")?,
            FetchErrorKind::Status(code) => write!(f, "HTTP {code}")?,
            FetchErrorKind::PermissionDenied => write!(f, "Permission denied")?,
            FetchErrorKind::InvalidLocator => write!(f, "Invalid locator")?,
            FetchErrorKind::Unavailable => write!(f, "Unavailable")?,
            FetchErrorKind::Timeout => write!(f, "Timeout")?,
            FetchErrorKind::Other => write!(f, "Error")?,
        }

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(locator) = &self.locator {
            write!(f, " (locator: {locator})")?;
        }

        Ok(())
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_not_found() {
        let err = FetchError::not_found("content/home.yml");

        assert_eq!(err.kind, FetchErrorKind::NotFound);
        assert_eq!(err.locator.as_deref(), Some("content/home.yml"));
    }

    #[test]
    fn test_fetch_error_io_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = FetchError::io(io_err, "content/home.yml");

        assert_eq!(err.kind, FetchErrorKind::NotFound);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_fetch_error_io_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = FetchError::io(io_err, "content/home.yml");

        assert_eq!(err.kind, FetchErrorKind::PermissionDenied);
    }

    #[test]
    fn test_fetch_error_display_status() {
        let err = FetchError::status(500, "content/home.yml").with_backend("Http");

        assert_eq!(err.to_string(), "[Http] HTTP 500 (locator: content/home.yml)");
    }

    #[test]
    fn test_fetch_error_display_simple() {
        let err = FetchError::new(FetchErrorKind::Timeout);

        assert_eq!(err.to_string(), "Timeout");
    }

    #[test]
    fn test_fetch_error_display_full() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = FetchError::io(io_err, "content/about.yml").with_backend("Fs");

        assert_eq!(
            err.to_string(),
            "[Fs] Not found: file not found (locator: content/about.yml)"
        );
    }

    #[test]
    fn test_fetch_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FetchError>();
    }
}
