use serde::{
    Deserialize,
    Serialize,
};

/// Outcome of a connection-diagnosis call.
///
/// All outcomes are values; a diagnosis never raises. A failed diagnosis
/// always carries a message naming the failure category so a configuration
/// UI can tell the user which field to fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionResult {
    pub connection_ok: bool,
    pub message: String,
}

impl ConnectionResult {
    pub fn success() -> Self {
        Self {
            connection_ok: true,
            message: String::new(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            connection_ok: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_carries_no_message() {
        let result = ConnectionResult::success();
        assert!(result.connection_ok);
        assert!(result.message.is_empty());
    }

    #[test]
    fn test_failure_carries_message() {
        let result = ConnectionResult::failure("URI is not absolute");
        assert!(!result.connection_ok);
        assert_eq!(result.message, "URI is not absolute");
    }
}
