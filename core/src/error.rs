//! Error kinds surfaced at the crate boundary (spec §7).
//!
//! Parse and capability errors are ordinary, expected outcomes of bad input
//! or of asking a family for something it doesn't support. Invariant errors
//! are bugs: something the algorithms assume can never happen, happened.
//! They are always logged via `log::error!` immediately before being
//! returned, so they are distinguishable from the first two kinds in logs
//! even though all three travel through the same `Result`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Textual input could not be decoded into the requested factor or braid
    /// for the active family, or a family parameter was out of range.
    Parse { reason: String },
    /// The operation is not supported by this family (e.g. `randomize` on a
    /// family with no efficient uniform sampler).
    Capability { what: &'static str },
    /// An internal invariant was violated. This is always a bug in the
    /// algorithms or in a `GarsideFamily` implementation, never a consequence
    /// of caller input.
    Invariant { detail: String },
}

impl Error {
    pub fn parse(reason: impl Into<String>) -> Self {
        Error::Parse {
            reason: reason.into(),
        }
    }

    pub fn capability(what: &'static str) -> Self {
        Error::Capability { what }
    }

    /// Builds an `Invariant` error and logs it at `error` level first, so the
    /// failure is distinguishable in logs from ordinary `Parse`/`Capability`
    /// results per spec §7.
    pub fn invariant(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        log::error!("garcide: internal invariant violated: {detail}");
        Error::Invariant { detail }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse { reason } => write!(f, "invalid string: {reason}"),
            Error::Capability { what } => write!(f, "unsupported capability: {what}"),
            Error::Invariant { detail } => write!(f, "internal invariant violated: {detail}"),
        }
    }
}

impl std::error::Error for Error {}

/// A non-fatal diagnostic raised by the classifiers (spec §7 item 4:
/// "Conjecture warning"). Never dropped silently: every classifier that can
/// detect a cross-orbit inconsistency returns one of these alongside its
/// result rather than swallowing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// USS/SC orbits disagreed on Thurston type.
    MixedThurstonType,
    /// USS/SC orbits disagreed on rigidity.
    RigidityDisagreement,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MixedThurstonType => {
                write!(f, "orbits disagree on Thurston type")
            }
            Warning::RigidityDisagreement => {
                write!(f, "orbits disagree on rigidity")
            }
        }
    }
}
