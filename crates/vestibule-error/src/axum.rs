use crate::{Error, ErrorType, GENERIC_SERVER_ERROR, NOT_FOUND_BODY};
use axum_core::response::{IntoResponse, Response};
use http::StatusCode;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self.ty {
            ErrorType::BadRequest(maybe_body) => {
                debug!(error = ?self.inner, "rejecting bad request");
                let body = maybe_body.unwrap_or_else(|| "Bad Request".into());
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ErrorType::NotFound => {
                debug!(error = ?self.inner, "resource not found");
                (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
            }
            ErrorType::Other => {
                error!(error = ?self.inner, "unhandled error");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_SERVER_ERROR).into_response()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{vestibule_error, ErrorType, GENERIC_SERVER_ERROR};
    use axum_core::response::IntoResponse;
    use http::StatusCode;
    use http_body_util::BodyExt;

    async fn body_text(response: axum_core::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn bad_request_shows_message() {
        let error = vestibule_error!(
            type = ErrorType::bad_request("All fields are required"),
            "missing name"
        );
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "All fields are required");
    }

    #[tokio::test]
    async fn internal_details_never_leak() {
        let error = vestibule_error!("database password is hunter2");
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, GENERIC_SERVER_ERROR);
    }

    #[tokio::test]
    async fn not_found() {
        let response = vestibule_error!(type = ErrorType::NotFound, "no such task").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
