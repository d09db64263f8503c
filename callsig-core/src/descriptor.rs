use std::{any::type_name, fmt};

use crate::{Signature, Spelling};

/// A printable summary of how a spelling resolved.
///
/// Resolution never depends on a `Descriptor`; it exists so consumers can log
/// or report what a callable type resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Descriptor {
    /// The row of the resolution table that matched.
    pub kind: Spelling,

    /// The name of the resolved result type, as reported by [`type_name`].
    ///
    /// The exact text is not guaranteed to be stable across compiler versions.
    pub output: &'static str,
}

/// Describes how `S` resolves.
#[must_use]
pub fn describe<S>() -> Descriptor
where
    S: Signature + ?Sized,
{
    Descriptor {
        kind: S::KIND,
        output: type_name::<S::Output>(),
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.kind, self.output)
    }
}
