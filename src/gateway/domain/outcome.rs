//! Result of dispatching tasks to the automation webhook.

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Tagged outcome of a dispatch attempt.
///
/// `Declined` means the user switched the integration off; `Failed` means
/// it was attempted and did not succeed. Callers can tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The webhook accepted the batch.
    Delivered {
        /// Parsed response body.
        data: Value,
    },
    /// The integration is disabled; nothing was sent.
    Declined {
        /// Reason shown to the user.
        message: String,
    },
    /// The request failed or was rejected.
    Failed {
        /// Description of the failure.
        error: String,
    },
}

impl DispatchOutcome {
    /// Returns `true` only for [`Self::Delivered`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delivered { .. } => f.write_str("delivered"),
            Self::Declined { message } => write!(f, "declined: {message}"),
            Self::Failed { error } => write!(f, "failed: {error}"),
        }
    }
}

/// `{success, data?, message?, error?}` as reported to the presentation layer.
#[derive(Serialize)]
struct OutcomeWire<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl Serialize for DispatchOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = match self {
            Self::Delivered { data } => OutcomeWire {
                success: true,
                data: Some(data),
                message: None,
                error: None,
            },
            Self::Declined { message } => OutcomeWire {
                success: false,
                data: None,
                message: Some(message),
                error: None,
            },
            Self::Failed { error } => OutcomeWire {
                success: false,
                data: None,
                message: None,
                error: Some(error),
            },
        };
        wire.serialize(serializer)
    }
}
