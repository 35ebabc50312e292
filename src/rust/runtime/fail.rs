// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use ::libc::{
    c_int,
    EBADMSG,
    EINVAL,
    EIO,
    EMSGSIZE,
    ENOBUFS,
    ENOTCONN,
    ERANGE,
};
use ::std::{
    error,
    fmt,
    io,
};

//======================================================================================================================
// Constants
//======================================================================================================================

/// Error kind raised when a caller asks for a payload larger than the link MTU.
pub const EXCEEDS_MTU: c_int = EMSGSIZE;

/// Names of the error kinds known to the framing layer, keyed by error code. This table is only read.
static ERROR_KINDS: &[(c_int, &str)] = &[
    (EXCEEDS_MTU, "ExceedsMtu"),
    (EBADMSG, "BadMessage"),
    (EINVAL, "InvalidArgument"),
    (EIO, "Io"),
    (ENOBUFS, "NoBufferSpace"),
    (ENOTCONN, "NotConnected"),
    (ERANGE, "OutOfRange"),
];

//======================================================================================================================
// Structures
//======================================================================================================================

/// Failure
#[derive(Clone, PartialEq, Eq)]
pub struct Fail {
    /// Error code.
    pub errno: c_int,
    /// Cause.
    pub cause: String,
    /// Lower-level failure that led to this one, if any.
    pub source: Option<Box<Fail>>,
}

//======================================================================================================================
// Associate Functions
//======================================================================================================================

/// Associate Functions for Failures
impl Fail {
    /// Creates a new Failure
    pub fn new(errno: i32, cause: &str) -> Self {
        Self {
            errno,
            cause: cause.to_string(),
            source: None,
        }
    }

    /// Creates a new Failure that wraps a lower-level one.
    pub fn with_source(errno: i32, cause: &str, source: Fail) -> Self {
        Self {
            errno,
            cause: cause.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates the failure reported when `size` does not fit in a link with the given `mtu`.
    pub fn exceeds_mtu(size: usize, mtu: usize) -> Self {
        let cause: String = format!("payload size exceeds MTU (size={}, mtu={})", size, mtu);
        Self::new(EXCEEDS_MTU, &cause)
    }

    /// Checks whether the target failure is an [EXCEEDS_MTU] failure.
    pub fn is_exceeds_mtu(&self) -> bool {
        self.errno == EXCEEDS_MTU
    }

    /// Returns the registered name of the target failure's kind, if it has one.
    pub fn kind_name(&self) -> Option<&'static str> {
        kind_name(self.errno)
    }

    /// Returns the outermost failure chained under the target one.
    pub fn head_source(&self) -> Option<&Fail> {
        self.source.as_deref()
    }
}

//======================================================================================================================
// Standalone Functions
//======================================================================================================================

/// Looks up the name registered for `errno`.
pub fn kind_name(errno: c_int) -> Option<&'static str> {
    ERROR_KINDS
        .iter()
        .find(|(code, _)| *code == errno)
        .map(|(_, name)| *name)
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

/// Display Trait Implementation for Failures
impl fmt::Display for Fail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind_name() {
            Some(name) => write!(f, "{} (errno={}): {}", name, self.errno, self.cause),
            None => write!(f, "Error {:?}: {}", self.errno, self.cause),
        }
    }
}

/// Debug trait Implementation for Failures
impl fmt::Debug for Fail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error {:?}: {:?}", self.errno, self.cause)?;
        if let Some(source) = &self.source {
            write!(f, " (caused by {:?})", source)?;
        }
        Ok(())
    }
}

/// Error Trait Implementation for Failures
impl error::Error for Fail {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.source.as_deref().map(|source| source as &(dyn error::Error + 'static))
    }
}

/// Conversion Trait Implementation for Fail
impl From<io::Error> for Fail {
    fn from(e: io::Error) -> Self {
        Self {
            errno: e.raw_os_error().unwrap_or(EIO),
            cause: format!("I/O error: {}", e),
            source: None,
        }
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
