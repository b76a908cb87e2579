#[macro_use]
extern crate tracing;

use std::fmt::{self, Debug, Display};

mod axum;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Body sent for every internal error; the cause only ever goes to the log
pub const GENERIC_SERVER_ERROR: &str = "An unexpected error has occurred. Please try again later.";

/// Body sent for unknown routes
pub const NOT_FOUND_BODY: &str = "404 Not Found";

#[macro_export]
macro_rules! bail {
    ($(type = $type:expr,)? $msg:expr) => {
        return Err($crate::vestibule_error!($(type = $type,)? $msg));
    };
}

#[macro_export]
macro_rules! vestibule_error {
    (type = $type:expr, $msg:expr) => {
        $crate::Error::msg($msg).with_error_type($type)
    };
    ($msg:expr) => {
        $crate::vestibule_error!(type = $crate::ErrorType::Other, $msg)
    };
}

#[derive(Clone, Debug)]
pub enum ErrorType {
    /// Malformed input, the body is shown to the client
    BadRequest(Option<String>),
    NotFound,
    Other,
}

impl ErrorType {
    #[must_use]
    pub fn bad_request<B>(body: B) -> Self
    where
        B: Into<String>,
    {
        Self::BadRequest(Some(body.into()))
    }
}

#[derive(Debug)]
pub struct Error {
    ty: ErrorType,
    inner: eyre::Report,
}

impl Error {
    #[inline]
    pub fn new<E>(ty: ErrorType, err: E) -> Self
    where
        E: Into<eyre::Report>,
    {
        Self {
            ty,
            inner: err.into(),
        }
    }

    #[inline]
    pub fn msg<M>(msg: M) -> Self
    where
        M: Debug + Display + Send + Sync + 'static,
    {
        eyre::Report::msg(msg).into()
    }

    #[must_use]
    pub fn error_type(&self) -> &ErrorType {
        &self.ty
    }

    pub fn error(&self) -> &eyre::Report {
        &self.inner
    }

    #[must_use]
    pub fn with_error_type(self, ty: ErrorType) -> Self {
        Self { ty, ..self }
    }
}

impl<T> From<T> for Error
where
    T: Into<eyre::Report>,
{
    fn from(value: T) -> Self {
        Self {
            ty: ErrorType::Other,
            inner: value.into(),
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <eyre::Report as fmt::Display>::fmt(&self.inner, f)
    }
}
