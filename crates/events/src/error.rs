use thiserror::Error;

/// A single callback failure collected while dispatching in isolate mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackFailure {
    /// Position of the callback in the event's subscriber list
    pub index: usize,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum HubError {
    #[error("Invalid event name {name:?}: {reason}")]
    InvalidEventName { name: String, reason: String },

    #[error("Callback #{index} for event {event} failed: {source}")]
    CallbackFailed {
        event: String,
        index: usize,
        #[source]
        source: anyhow::Error,
    },

    #[error("{} callback(s) for event {event} failed", .failures.len())]
    DispatchFailed {
        event: String,
        failures: Vec<CallbackFailure>,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = HubError::InvalidEventName {
            name: "".to_string(),
            reason: "must not be empty".to_string(),
        };
        assert!(error.to_string().contains("must not be empty"));

        let error = HubError::CallbackFailed {
            event: "SUN.SHINE".to_string(),
            index: 2,
            source: anyhow::anyhow!("boom"),
        };
        let message = error.to_string();
        assert!(message.contains("#2"));
        assert!(message.contains("SUN.SHINE"));
        assert!(message.contains("boom"));
    }

    #[test]
    fn test_dispatch_failed_counts_failures() {
        let error = HubError::DispatchFailed {
            event: "SUN.SHINE".to_string(),
            failures: vec![
                CallbackFailure {
                    index: 0,
                    message: "a".to_string(),
                },
                CallbackFailure {
                    index: 3,
                    message: "b".to_string(),
                },
            ],
        };
        assert_eq!(error.to_string(), "2 callback(s) for event SUN.SHINE failed");
    }
}
