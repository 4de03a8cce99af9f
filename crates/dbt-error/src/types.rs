use std::{
    backtrace::Backtrace,
    fmt::{self, Debug, Display, Formatter},
    io,
    path::PathBuf,
};

use super::ErrorCode;

pub type FsResult<T, E = Box<FsError>> = Result<T, E>;

pub struct FsError {
    pub code: ErrorCode,
    pub location: Option<super::CodeLocation>,
    pub context: String,
    cause: Option<WrappedError>,
    backtrace: Backtrace,

    // Chain of errors, to allow returning multiple errors in a single [FsResult]:
    next: Option<Box<FsError>>,
}

impl Debug for FsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FsError")
            .field("code", &self.code)
            .field("location", &self.location)
            .field("context", &self.context)
            .field("cause", &self.cause)
            .finish()
    }
}

impl Display for FsError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.context)?;
        if let Some(cause) = &self.cause {
            if !self.context.is_empty() {
                write!(f, ": ")?;
            }
            write!(f, "{cause}")?
        }
        Ok(())
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_ref().map(|e| e as &dyn std::error::Error)
    }
}

impl FsError {
    pub fn new(code: ErrorCode, context: impl Into<String>) -> Self {
        FsError {
            code,
            location: None,
            context: context.into(),
            cause: None,
            backtrace: Backtrace::capture(),
            next: None,
        }
    }

    pub fn new_with_forced_backtrace(code: ErrorCode, context: impl Into<String>) -> Self {
        FsError {
            code,
            location: None,
            context: context.into(),
            cause: None,
            backtrace: Backtrace::force_capture(),
            next: None,
        }
    }

    /// True if this error contains a backtrace.
    pub fn has_backtrace(&self) -> bool {
        self.backtrace.status() == std::backtrace::BacktraceStatus::Captured
    }

    /// Returns the backtrace as a string, if available.
    pub fn get_backtrace(&self) -> Option<String> {
        if self.has_backtrace() {
            Some(self.backtrace.to_string())
        } else {
            None
        }
    }

    /// Returns a pretty-printed version of this error, including the error code
    /// and file location as a suffix.
    pub fn pretty(&self) -> String {
        let mut s = format!("dbt{}: {}", self.code, self);
        if let Some(location) = &self.location {
            s.push_str(&format!("\n  --> {location}"));
        }
        if let Some(backtrace) = self.get_backtrace() {
            s.push_str(&format!("\n{backtrace}"));
        }
        s
    }

    /// True if this error contains multiple errors.
    pub fn is_multiple_errors(&self) -> bool {
        self.next.is_some()
    }

    /// Returns the number of errors in this error chain.
    pub fn count(&self) -> usize {
        let mut count = 1;
        let mut cur = self;
        while let Some(e) = &cur.next {
            count += 1;
            cur = e;
        }
        count
    }

    /// Adds a cause to this error, replacing the existing cause if any.
    ///
    /// Note: if you attach a cause to an error, make sure you don't format the
    /// cause into the [Self::context] for this error, as then the cause would
    /// be double printed when formatting this error.
    pub fn with_cause(self, cause: impl Into<WrappedError>) -> Self {
        FsError {
            cause: Some(cause.into()),
            ..self
        }
    }

    /// Adds a location to this error, replacing an existing location if it's more specific.
    pub fn with_location(self, location: impl Into<super::CodeLocation>) -> FsError {
        let location = location.into();
        let location = if location.has_position() {
            location
        } else if self.location.is_some() && self.location.as_ref().unwrap().has_position() {
            self.location.unwrap()
        } else {
            location
        };

        FsError {
            location: Some(location),
            ..self
        }
    }

    pub fn with_context(self, context: impl Into<String>) -> Self {
        FsError {
            context: context.into(),
            ..self
        }
    }

    pub fn with_code(self, code: ErrorCode) -> Self {
        FsError { code, ..self }
    }

    pub fn with_chained_errors(self, next: Box<FsError>) -> Self {
        let mut head = Box::new(self);
        let mut last = &mut head;
        while last.next.is_some() {
            last = last.next.as_mut().expect("last.next.is_some()");
        }
        last.next = Some(next);
        *head
    }

    /// Flattens multiple errors into a single vector.
    pub fn flatten(self) -> Vec<FsError> {
        let mut errors = vec![];
        let mut cur = self;
        loop {
            let mut next = cur.next.take();
            errors.push(cur);
            if let Some(e) = next.take() {
                cur = *e;
            } else {
                break;
            }
        }
        errors
    }

    /// Applies the given mutation to this error and all chained errors.
    pub fn for_each_mut<F>(&mut self, f: F)
    where
        F: Fn(&mut Self),
    {
        let mut cur = self;
        loop {
            f(cur);
            if let Some(e) = cur.next.as_mut() {
                cur = e;
            } else {
                break;
            }
        }
    }

    /// Applies the given function to this error and all chained errors.
    pub fn for_each<F>(&self, f: F)
    where
        F: Fn(&Self),
    {
        let mut cur = self;
        loop {
            f(cur);
            if let Some(e) = &cur.next {
                cur = e.as_ref();
            } else {
                break;
            }
        }
    }

    pub fn with_relative_path(mut self, path: &str) -> Self {
        if let Some(ref mut location) = self.location {
            location.file = PathBuf::from(path);
        } else {
            self.location = Some(super::CodeLocation::new(1, 1, 0, path));
        }
        self
    }
}

/// Dynamically typed wrapper to allow propagating structured error info.
///
/// A wrapped error can be any type that may provide potentially useful debugging information.
/// If not, just use the [WrappedError::Generic] variant.
#[derive(Debug)]
#[non_exhaustive]
pub enum WrappedError {
    SerdeYml(dbt_serde_yaml::Error),
    SerdeJson(serde_json::Error),
    Io(io::Error),
    Fmt(fmt::Error),
    Generic(String),
    Cli(Box<FsError>),
}

impl Display for WrappedError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            WrappedError::Generic(e) => write!(f, "{e}"),
            WrappedError::Io(e) => write!(f, "{e}"),
            WrappedError::Cli(e) => write!(f, "{e}"),
            WrappedError::SerdeYml(e) => write!(f, "{e}"),
            WrappedError::SerdeJson(e) => write!(f, "{e}"),
            WrappedError::Fmt(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for WrappedError {}

impl From<io::Error> for Box<FsError> {
    fn from(e: io::Error) -> Self {
        Box::new(FsError::new(ErrorCode::IoError, format!("{e}")).with_cause(WrappedError::Io(e)))
    }
}

// We cannot implement From<std::io::Error> for FsError because IO Error usually carries
// too little information.
impl<T> LiftableResult<T> for Result<T, io::Error> {
    fn expect_ok(self) -> FsResult<T> {
        self.map_err(|e| {
            FsError::new_with_forced_backtrace(
                ErrorCode::Unexpected,
                format!("Unexpected IO error: {e}"),
            )
            .with_cause(WrappedError::Io(e))
            .into()
        })
    }

    fn lift(self, f: impl FnOnce() -> ErrContext) -> FsResult<T> {
        self.map_err(|e| {
            let e =
                FsError::new(ErrorCode::IoError, format!("{e}")).with_cause(WrappedError::Io(e));
            let ctx = f();
            let e = if let Some(code) = ctx.code {
                e.with_code(code)
            } else {
                e
            };
            let e = if let Some(location) = ctx.location {
                e.with_location(location)
            } else {
                e
            };
            let e = if let Some(context) = ctx.context {
                let msg = e.context.clone();
                e.with_context(format!("{context}: {msg}"))
            } else {
                e
            };
            e.into()
        })
    }
}

impl From<io::Error> for WrappedError {
    fn from(e: io::Error) -> Self {
        WrappedError::Io(e)
    }
}

impl From<std::string::FromUtf8Error> for FsError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        FsError::new(ErrorCode::EncodingError, format!("Encoding error: {e}"))
    }
}

impl From<std::string::FromUtf8Error> for Box<FsError> {
    fn from(e: std::string::FromUtf8Error) -> Self {
        Box::new(e.into())
    }
}

impl From<std::string::FromUtf8Error> for WrappedError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        WrappedError::Generic(e.to_string())
    }
}

impl From<dbt_serde_yaml::Error> for WrappedError {
    fn from(e: dbt_serde_yaml::Error) -> Self {
        WrappedError::SerdeYml(e)
    }
}

impl From<serde_json::Error> for FsError {
    fn from(e: serde_json::Error) -> Self {
        FsError::new(ErrorCode::SerializationError, "JSON error")
            .with_cause(WrappedError::SerdeJson(e))
    }
}

impl From<serde_json::Error> for Box<FsError> {
    fn from(e: serde_json::Error) -> Self {
        Box::new(e.into())
    }
}

impl From<serde_json::Error> for WrappedError {
    fn from(e: serde_json::Error) -> Self {
        WrappedError::SerdeJson(e)
    }
}

impl From<fmt::Error> for FsError {
    fn from(e: fmt::Error) -> Self {
        FsError::new(ErrorCode::FmtError, "Fmt error").with_cause(WrappedError::Fmt(e))
    }
}

impl From<fmt::Error> for Box<FsError> {
    fn from(e: fmt::Error) -> Self {
        Box::new(e.into())
    }
}

impl From<Box<dyn std::error::Error>> for Box<FsError> {
    fn from(value: Box<dyn std::error::Error>) -> Self {
        Box::new(FsError::new(ErrorCode::Generic, format!("{value}")))
    }
}

// --- Explicit conversions ---

pub trait LiftableResult<T>: private::Sealed {
    fn expect_ok(self) -> FsResult<T>;

    fn lift(self, f: impl FnOnce() -> ErrContext) -> FsResult<T>;
}

impl<T, E> LiftableResult<T> for FsResult<T, E>
where
    E: Into<FsError>,
{
    fn expect_ok(self) -> FsResult<T> {
        self.map_err(|e| {
            let e = e.into();
            FsError::new_with_forced_backtrace(
                ErrorCode::Unexpected,
                format!("Unexpected error: {e}"),
            )
            .with_cause(WrappedError::Cli(Box::new(e)))
            .into()
        })
    }

    fn lift(self, f: impl FnOnce() -> ErrContext) -> FsResult<T> {
        self.with_context(f)
    }
}

pub trait ContextableResult<T>: private::Sealed {
    fn with_context(self, f: impl FnOnce() -> ErrContext) -> FsResult<T>;

    fn with_cause(self, cause: impl Into<WrappedError>) -> FsResult<T>;
}

#[derive(Debug, Clone)]
pub struct ErrContext {
    pub code: Option<ErrorCode>,
    pub location: Option<super::CodeLocation>,
    pub context: Option<String>,
}

impl<T, E> ContextableResult<T> for FsResult<T, E>
where
    E: Into<FsError>,
{
    fn with_context(self, f: impl FnOnce() -> ErrContext) -> FsResult<T> {
        self.map_err(|e| {
            let e = e.into();
            let ctx = f();
            let e = if let Some(code) = ctx.code {
                e.with_code(code)
            } else {
                e
            };
            let e = if let Some(location) = ctx.location {
                e.with_location(location)
            } else {
                e
            };
            let e = if let Some(context) = ctx.context {
                e.with_context(context)
            } else {
                e
            };
            e.into()
        })
    }

    fn with_cause(self, cause: impl Into<WrappedError>) -> FsResult<T> {
        self.map_err(|e| {
            let e = e.into();
            e.with_cause(cause).into()
        })
    }
}

impl<T> ContextableResult<T> for FsResult<T> {
    fn with_context(self, f: impl FnOnce() -> ErrContext) -> FsResult<T> {
        self.map_err(|e| {
            let e = *e;
            let ctx = f();
            let e = if let Some(code) = ctx.code {
                e.with_code(code)
            } else {
                e
            };
            let e = if let Some(location) = ctx.location {
                e.with_location(location)
            } else {
                e
            };
            let e = if let Some(context) = ctx.context {
                let mut e = e;
                // When adding context to an error, make sure to record the
                // original error as cause
                let cause = e
                    .cause
                    .take()
                    .unwrap_or(WrappedError::Generic(e.context.clone()));
                e.with_context(context).with_cause(cause)
            } else {
                e
            };
            e.into()
        })
    }

    fn with_cause(self, cause: impl Into<WrappedError>) -> FsResult<T> {
        self.map_err(|e| {
            let e = *e;
            e.with_cause(cause).into()
        })
    }
}

mod private {
    use super::*;

    pub trait Sealed {}

    impl Sealed for FsError {}

    impl<T, E> Sealed for FsResult<T, E> where E: Into<FsError> {}

    impl<T> Sealed for FsResult<T> {}

    impl<T> Sealed for Result<T, io::Error> {}
}
