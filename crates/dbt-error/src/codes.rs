use std::collections::HashMap;
use std::fmt::Display;

/// Error codes for the selection core.
///
/// Error codes define the general "semantic type" of a [FsError][crate::FsError]. Each error
/// code is a 4-digit number stored as a u16.
#[repr(u16)]
#[non_exhaustive]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorCode {
    // ----------------- CLI errors [1000, 8999] ------------------------------
    /// Default catch-all code for when you're too lazy to specify a proper code
    Generic = 1000,
    IoError = 1001,
    EncodingError = 1002,
    InvalidConfig = 1005,
    InvalidPath = 1006,
    InvalidArgument = 1007,
    MissingArgument = 1008,
    SerializationError = 1013,
    InvalidType = 1026,
    FmtError = 1041,

    // --------------------------------------------------------------------------------------------
    // Node selection
    SelectorError = 1600,
    NoNodesSelected = 1601,

    InvalidUserInput = 8997,
    InvalidOptions = 8996,

    // -----------------  ---------------------
    // Internal errors [9000, 9899]
    // Everything below this line is an internal error. They will be presented
    // as bugs if surfaced to the user.
    NotSupported = 9000,
    Unknown = 9001,
    Unexpected = 9002,
    NotImplemented = 9003,
}

impl std::hash::Hash for ErrorCode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (*self as u16).hash(state)
    }
}

impl Default for ErrorCode {
    fn default() -> Self {
        Self::Generic
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:04}", *self as u16)
    }
}

impl ErrorCode {
    pub fn is_bug(&self) -> bool {
        (*self as u16) >= (Self::NotSupported as u16)
    }
}

/// General warning handling, controlled e.g. via a `-w` CLI flag in consuming binaries.
///
/// Warnings can be set and unset. A warning is active if its key in the `Warnings` hashmap is
/// defined. The value of the key can be used to provide additional info.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warnings {
    pub values: HashMap<ErrorCode, String>,
}

impl Warnings {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn with_error_code(mut self, code: ErrorCode) -> Self {
        self.values.insert(code, String::new());
        self
    }

    pub fn with_error_code_and_value(mut self, code: ErrorCode, value: String) -> Self {
        self.values.insert(code, value);
        self
    }

    pub fn contains(&self, code: &ErrorCode) -> bool {
        self.values.contains_key(code)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ErrorCode, &String)> {
        self.values.iter()
    }
}

impl Default for Warnings {
    fn default() -> Self {
        Warnings::new()
    }
}
