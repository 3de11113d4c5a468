//! Error types for the grid engine.

/// Errors raised by grid construction, state transitions, bulk actions
/// and the search adapter.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Invalid column model or pagination configuration.
    ///
    /// Raised at construction time (duplicate column ids, a page size
    /// outside the configured allow-list, an empty allow-list). These are
    /// caller defects and fail fast rather than degrading silently.
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration defect.
        message: String,
    },

    /// A bulk action was dispatched with zero rows selected.
    ///
    /// The dispatcher maps this to a user-visible notice and a no-op
    /// outcome; it never surfaces as a hard failure.
    #[error("no rows selected")]
    EmptySelection,

    /// A host capability was unavailable (print surface blocked, native
    /// share unsupported, clipboard write denied).
    #[error("environment unavailable: {message}")]
    Environment {
        /// Description of the missing capability.
        message: String,
    },

    /// The search backend rejected a query.
    #[error("search failed: {message}")]
    Search {
        /// Description of the failure reported by the backend.
        message: String,
    },
}

impl GridError {
    /// Creates a new configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a new environment error.
    pub fn environment(message: impl Into<String>) -> Self {
        Self::Environment {
            message: message.into(),
        }
    }

    /// Creates a new search error.
    pub fn search(message: impl Into<String>) -> Self {
        Self::Search {
            message: message.into(),
        }
    }

    /// Returns true if this error should reach the user as a notice
    /// rather than a failure.
    pub fn is_notice(&self) -> bool {
        matches!(self, GridError::EmptySelection | GridError::Environment { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GridError::configuration("duplicate column id 'email'");
        assert_eq!(
            err.to_string(),
            "configuration error: duplicate column id 'email'"
        );

        let err = GridError::environment("popup blocked");
        assert_eq!(err.to_string(), "environment unavailable: popup blocked");

        assert_eq!(GridError::EmptySelection.to_string(), "no rows selected");
    }

    #[test]
    fn test_notice_classification() {
        assert!(GridError::EmptySelection.is_notice());
        assert!(GridError::environment("clipboard denied").is_notice());
        assert!(!GridError::configuration("bad page size").is_notice());
        assert!(!GridError::search("timeout").is_notice());
    }
}
