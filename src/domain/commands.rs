use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookingId, BookingStatus, ClassroomId, TeacherId};

/// コマンド：予約を作成する
///
/// purposeとtime rangeのバリデーションはドメイン層の
/// `create_booking`で行うため、ここでは生の値を保持する。
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBooking {
    pub classroom_id: ClassroomId,
    pub teacher_id: TeacherId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub purpose: String,
    pub requested_at: DateTime<Utc>,
}

/// コマンド：予約ステータスを変更する（管理者のみ）
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeBookingStatus {
    pub booking_id: BookingId,
    pub new_status: BookingStatus,
    pub changed_at: DateTime<Utc>,
}
