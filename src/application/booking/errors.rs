use thiserror::Error;

use crate::domain::errors::CreateBookingError;

/// 予約管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum BookingApplicationError {
    /// 入力のバリデーション失敗（フィールド単位の詳細を保持）
    #[error("Validation failed on field `{}`", .0.field())]
    Validation(CreateBookingError),

    /// 操作者に権限がない
    #[error("Actor is not authorized for this operation")]
    NotAuthorized,

    /// 教室が存在しない
    #[error("Classroom not found")]
    ClassroomNotFound,

    /// 教師が存在しない
    #[error("Teacher not found")]
    TeacherNotFound,

    /// 予約が見つからない
    #[error("Booking not found")]
    BookingNotFound,

    /// ドメイン層のエラー（遷移方針違反など）
    #[error("Domain error: {0}")]
    DomainError(String),

    /// BookingStoreのエラー
    #[error("Booking store error")]
    BookingStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// ClassroomDirectoryのエラー
    #[error("Classroom directory error")]
    ClassroomDirectoryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// TeacherDirectoryのエラー
    #[error("Teacher directory error")]
    TeacherDirectoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookingApplicationError>;
