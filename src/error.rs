//! Crate-wide error and result types.

use std::io;

/// The result type used throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned when creating or driving a virtual device.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The device configuration was rejected before any system call was made
    /// (empty device path, empty or over-length name, out-of-range code).
    #[error("invalid device configuration: {0}")]
    InvalidConfig(String),

    /// A step of the device creation sequence failed.
    ///
    /// `step` names the failing ioctl (and code, where applicable). The
    /// partially-created descriptor has already been closed when this is
    /// returned.
    #[error("failed to register virtual device ({step})")]
    Registration {
        step: String,
        #[source]
        source: io::Error,
    },

    /// Writing to or tearing down a live device failed.
    #[error("device I/O failed ({op})")]
    Io {
        op: &'static str,
        #[source]
        source: io::Error,
    },

    /// The operation was attempted on a handle that has already been closed.
    #[error("virtual device is closed")]
    Closed,

    /// The device's sysfs path could not be resolved.
    #[error("failed to look up device syspath")]
    Lookup(#[source] io::Error),
}

impl Error {
    pub(crate) fn registration(step: impl Into<String>, source: io::Error) -> Self {
        Self::Registration {
            step: step.into(),
            source,
        }
    }

    pub(crate) fn io(op: &'static str, source: io::Error) -> Self {
        Self::Io { op, source }
    }

    /// Returns the [`io::ErrorKind`] of the underlying OS error, if there is
    /// one.
    ///
    /// This allows callers to distinguish a missing `uinput` device node
    /// ([`io::ErrorKind::NotFound`]) or insufficient privileges
    /// ([`io::ErrorKind::PermissionDenied`]) from other failures.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Registration { source, .. } | Self::Io { source, .. } | Self::Lookup(source) => {
                Some(source.kind())
            }
            Self::InvalidConfig(_) | Self::Closed => None,
        }
    }
}
