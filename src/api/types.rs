use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::commands::CreateBooking;
use crate::domain::value_objects::{BookingStatus, ClassroomId, TeacherId};
use crate::ports::booking_store::BookingView;

/// 予約作成リクエスト（POST /bookings）
///
/// フォームと同じく日付と時刻を別フィールドで受け取り、
/// 2つの絶対時刻に合成する。開始・終了とも同じ壁時計の規約なので、
/// 前後判定は自己完結する（タイムゾーン正規化は行わない）。
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub classroom_id: Uuid,
    pub teacher_id: Uuid,
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_date: NaiveDate,
    pub end_time: NaiveTime,
    pub purpose: String,
}

impl CreateBookingRequest {
    /// 日付+時刻のペアを合成してコマンドに変換する
    pub fn to_command(&self, requested_at: DateTime<Utc>) -> CreateBooking {
        CreateBooking {
            classroom_id: ClassroomId::from_uuid(self.classroom_id),
            teacher_id: TeacherId::from_uuid(self.teacher_id),
            start_time: combine(self.start_date, self.start_time),
            end_time: combine(self.end_date, self.end_time),
            purpose: self.purpose.clone(),
            requested_at,
        }
    }
}

/// 日付と時刻を1つの絶対時刻に合成する
fn combine(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    NaiveDateTime::new(date, time).and_utc()
}

/// ステータス変更リクエスト（PUT /bookings/:id/status）
#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}

/// 予約一覧取得のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct ListBookingsQuery {
    /// ステータスでフィルタリング（pending, approved, rejected, cancelled, completed）
    pub status: Option<String>,
}

/// 予約作成レスポンス
#[derive(Debug, Serialize)]
pub struct BookingCreatedResponse {
    pub booking_id: Uuid,
    pub status: BookingStatus,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// ステータス変更レスポンス
#[derive(Debug, Serialize)]
pub struct BookingStatusChangedResponse {
    pub booking_id: Uuid,
    pub status: BookingStatus,
}

/// 予約レスポンス（GET /bookings/:id と GET /bookings）
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub booking_id: Uuid,
    pub classroom_id: Uuid,
    pub classroom_name: String,
    pub teacher_id: Uuid,
    pub teacher_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub purpose: String,
    pub status: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BookingView> for BookingResponse {
    fn from(view: BookingView) -> Self {
        Self {
            booking_id: view.booking_id.value(),
            classroom_id: view.classroom_id.value(),
            classroom_name: view.classroom_name,
            teacher_id: view.teacher_id.value(),
            teacher_name: view.teacher_name,
            start_time: view.start_time,
            end_time: view.end_time,
            purpose: view.purpose,
            status: view.status.as_str().to_string(),
            created_by: view.created_by.value(),
            created_at: view.created_at,
            updated_at: view.updated_at,
        }
    }
}

/// 完了化タスクのレスポンス（POST /tasks/complete-expired）
#[derive(Debug, Serialize)]
pub struct CompleteExpiredResponse {
    pub updated_count: u64,
}

/// 削除タスクのレスポンス（POST /tasks/purge-completed）
#[derive(Debug, Serialize)]
pub struct PurgeCompletedResponse {
    pub deleted_count: u64,
}

/// エラーレスポンス
///
/// バリデーションエラーの場合は対象フィールドのパスを含む。
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

/// ステータスクエリパラメータのパースとバリデーション
pub fn parse_status_filter(status: &str) -> Result<BookingStatus, String> {
    status.parse::<BookingStatus>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_request_combines_date_and_time_fields() {
        let req = CreateBookingRequest {
            classroom_id: Uuid::new_v4(),
            teacher_id: Uuid::new_v4(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            purpose: "補講".to_string(),
        };

        let now = Utc.with_ymd_and_hms(2024, 5, 30, 12, 0, 0).unwrap();
        let cmd = req.to_command(now);

        assert_eq!(
            cmd.start_time,
            Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
        );
        assert_eq!(
            cmd.end_time,
            Utc.with_ymd_and_hms(2024, 6, 1, 10, 30, 0).unwrap()
        );
        assert_eq!(cmd.requested_at, now);
    }

    #[test]
    fn test_parse_status_filter() {
        assert_eq!(parse_status_filter("approved"), Ok(BookingStatus::Approved));
        assert!(parse_status_filter("unknown").is_err());
    }

    #[test]
    fn test_error_response_field_is_omitted_when_none() {
        let json = serde_json::to_string(&ErrorResponse::new("X", "y")).unwrap();
        assert!(!json.contains("field"));

        let json =
            serde_json::to_string(&ErrorResponse::new("X", "y").with_field("end_time")).unwrap();
        assert!(json.contains("\"field\":\"end_time\""));
    }
}
