use crate::application::booking::BookingApplicationError;
use crate::domain::errors::CreateBookingError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub enum ApiError {
    /// クエリパラメータ等の不正
    BadRequest(String),
    /// アプリケーション層のエラー
    Application(BookingApplicationError),
}

impl From<BookingApplicationError> for ApiError {
    fn from(err: BookingApplicationError) -> Self {
        ApiError::Application(err)
    }
}

fn validation_response(err: &CreateBookingError) -> Response {
    let body = Json(
        ErrorResponse::new("VALIDATION_ERROR", err.message()).with_field(err.field()),
    );
    (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let app_err = match self {
            ApiError::BadRequest(msg) => {
                let body = Json(ErrorResponse::new("BAD_REQUEST", msg));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            ApiError::Application(err) => err,
        };

        let (status, error_type, message) = match app_err {
            // 422 Unprocessable Entity - フィールド単位のバリデーション失敗
            BookingApplicationError::Validation(ref e) => {
                return validation_response(e);
            }

            // 403 Forbidden - 権限なし
            BookingApplicationError::NotAuthorized => (
                StatusCode::FORBIDDEN,
                "NOT_AUTHORIZED",
                "You are not allowed to perform this operation",
            ),

            // 404 Not Found - リクエストされたリソースが存在しない
            BookingApplicationError::BookingNotFound => (
                StatusCode::NOT_FOUND,
                "BOOKING_NOT_FOUND",
                "Booking not found",
            ),

            // 422 Unprocessable Entity - 参照先が存在しない
            BookingApplicationError::ClassroomNotFound => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "CLASSROOM_NOT_FOUND",
                "Classroom not found",
            ),
            BookingApplicationError::TeacherNotFound => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "TEACHER_NOT_FOUND",
                "Teacher not found",
            ),
            BookingApplicationError::DomainError(ref msg) => {
                let body = Json(ErrorResponse::new("DOMAIN_ERROR", msg.clone()));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            BookingApplicationError::BookingStoreError(ref e) => {
                tracing::error!("Booking store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "BOOKING_STORE_ERROR",
                    "Storage operation failed",
                )
            }
            BookingApplicationError::ClassroomDirectoryError(ref e) => {
                tracing::error!("Classroom directory error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CLASSROOM_DIRECTORY_ERROR",
                    "Classroom directory error",
                )
            }
            BookingApplicationError::TeacherDirectoryError(ref e) => {
                tracing::error!("Teacher directory error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TEACHER_DIRECTORY_ERROR",
                    "Teacher directory error",
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
