//! Open enumerations classifying a task record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a string-backed enumeration with a fixed set of known values and
/// an `Other` variant that keeps unknown input verbatim.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$variant_meta])* $variant, )+
            /// A value outside the known set, preserved verbatim.
            Other(String),
        }

        impl $name {
            /// Wire representations of the known values, in display order.
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            /// Returns the wire representation.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Other(value) => value,
                }
            }

            /// Returns `true` when the value is one of the known variants.
            #[must_use]
            pub const fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $wire => Self::$variant, )+
                    other => Self::Other(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match Self::from(value.as_str()) {
                    Self::Other(_) => Self::Other(value),
                    known => known,
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_owned(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

open_enum! {
    /// Kind of work a task represents.
    TaskLabel, default = Feature {
        /// Urgent production fix.
        Hotfix => "Hotfix",
        /// New functionality.
        Feature => "Feature",
        /// Work currently in quality assurance.
        UnderQa => "Under-QA",
        /// Blocked on someone else's input.
        HelpNeeded => "Help-Needed",
        /// Defect.
        Bug => "Bug",
    }
}

open_enum! {
    /// Deployment environment a task targets.
    TaskEnv, default = Dev {
        /// Development.
        Dev => "dev",
        /// Staging.
        Stage => "stage",
        /// Production.
        Production => "production",
    }
}

open_enum! {
    /// Workflow status of a task.
    TaskStatus, default = Backlog {
        /// Not yet started.
        Backlog => "Backlog",
        /// Being worked on.
        InProgress => "In Progress",
        /// Awaiting code review.
        NeedsReview => "Needs Review",
        /// Awaiting QA.
        NeedsQa => "Needs QA",
        /// QA found problems.
        BugsReported => "Bugs Reported",
        /// Finished.
        Completed => "Completed",
        /// Needs a conversation before continuing.
        NeedsDiscussion => "Needs Discussion",
    }
}
