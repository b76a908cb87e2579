use axum::{
    extract::{FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;
use vestibule_error::{vestibule_error, Error, ErrorType};

pub const INVALID_FORM: &str = "Invalid form submission";

/// URL-encoded form body
///
/// Unlike [`Form`], rejections answer `400` with a plain-text body.
pub struct FormData<T>(pub T);

impl<T, S> FromRequest<S> for FormData<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                vestibule_error!(type = ErrorType::bad_request(INVALID_FORM), rejection)
            })?;

        Ok(Self(value))
    }
}
