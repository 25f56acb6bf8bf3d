#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    BookingId, BookingStatus, ChangeStatusError, ClassroomId, CreateBookingError, Purpose,
    TeacherId, TimeRange, UserId,
};

/// Booking集約 - 1教室の1回分の予約
///
/// ステータスはPendingで始まり、管理者の手動編集と
/// 定期メンテナンスタスク（完了化・削除）によって遷移する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    // 識別子
    pub booking_id: BookingId,

    // 他の集約への参照（IDのみ）
    pub classroom_id: ClassroomId,
    pub teacher_id: TeacherId,

    // 予約管理の責務
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub purpose: Purpose,
    pub status: BookingStatus,

    // 監査情報
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 純粋関数：予約を作成する（Booking Validator）
///
/// ビジネスルール：
/// - 終了時刻は開始時刻より厳密に後（エラーは終了時刻フィールドに帰属）
/// - 利用目的は1〜500文字
/// - ステータスは必ずPendingで開始
///
/// 副作用なし。ストレージへの書き込みは呼び出し側の責務。
pub fn create_booking(
    classroom_id: ClassroomId,
    teacher_id: TeacherId,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    purpose: &str,
    created_by: UserId,
    now: DateTime<Utc>,
) -> Result<Booking, CreateBookingError> {
    let range = TimeRange::new(start_time, end_time)?;
    let purpose = Purpose::new(purpose)?;

    Ok(Booking {
        booking_id: BookingId::new(),
        classroom_id,
        teacher_id,
        start_time: range.start(),
        end_time: range.end(),
        purpose,
        status: BookingStatus::Pending,
        created_by,
        created_at: now,
        updated_at: now,
    })
}

/// 管理者手動編集での遷移可否
///
/// 現行の方針は意図的に無制限：管理者はCompletedをPendingに戻すことも
/// 含め、任意の2ステータス間を移動できる。チェックの不在ではなく
/// 明示的な方針としてここに固定し、テストで担保する。
pub fn manual_transition_allowed(_from: BookingStatus, _to: BookingStatus) -> bool {
    true
}

/// 純粋関数：ステータスを手動で変更する
///
/// 方針関数`manual_transition_allowed`を通過した遷移のみ適用する。
/// 副作用なし。新しいBookingを返す。
pub fn change_status(
    booking: &Booking,
    new_status: BookingStatus,
    now: DateTime<Utc>,
) -> Result<Booking, ChangeStatusError> {
    if !manual_transition_allowed(booking.status, new_status) {
        return Err(ChangeStatusError::TransitionNotAllowed {
            from: booking.status,
            to: new_status,
        });
    }

    Ok(Booking {
        status: new_status,
        updated_at: now,
        ..booking.clone()
    })
}

/// 純粋関数：完了化タスクの対象判定
///
/// Approvedかつ終了時刻を過ぎた予約が対象。
/// Pendingは自動では遷移せず、管理者の操作を待つ。
pub fn due_for_completion(booking: &Booking, now: DateTime<Utc>) -> bool {
    booking.status == BookingStatus::Approved && now > booking.end_time
}

/// 純粋関数：削除タスクの対象判定
///
/// Completedかつ終了時刻を過ぎた予約が対象（ハード削除）。
pub fn due_for_purge(booking: &Booking, now: DateTime<Utc>) -> bool {
    booking.status == BookingStatus::Completed && now > booking.end_time
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fixture_booking(status: BookingStatus, end_time: DateTime<Utc>) -> Booking {
        Booking {
            booking_id: BookingId::new(),
            classroom_id: ClassroomId::new(),
            teacher_id: TeacherId::new(),
            start_time: end_time - Duration::hours(1),
            end_time,
            purpose: Purpose::new("理科実験").unwrap(),
            status,
            created_by: UserId::new(),
            created_at: end_time - Duration::days(1),
            updated_at: end_time - Duration::days(1),
        }
    }

    // TDD: create_booking のテスト
    #[test]
    fn test_create_booking_starts_pending() {
        let now = Utc.with_ymd_and_hms(2024, 5, 30, 12, 0, 0).unwrap();
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();

        let booking = create_booking(
            ClassroomId::new(),
            TeacherId::new(),
            start,
            end,
            "保護者面談",
            UserId::new(),
            now,
        )
        .unwrap();

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.start_time, start);
        assert_eq!(booking.end_time, end);
        assert_eq!(booking.created_at, now);
        assert_eq!(booking.updated_at, now);
    }

    #[test]
    fn test_create_booking_rejects_end_before_start() {
        // シナリオ: start = 2024-06-01T09:00, end = 2024-06-01T08:00
        let now = Utc.with_ymd_and_hms(2024, 5, 30, 12, 0, 0).unwrap();
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();

        let result = create_booking(
            ClassroomId::new(),
            TeacherId::new(),
            start,
            end,
            "保護者面談",
            UserId::new(),
            now,
        );

        let err = result.unwrap_err();
        assert_eq!(err, CreateBookingError::EndNotAfterStart);
        assert_eq!(err.field(), "end_time");
    }

    #[test]
    fn test_create_booking_rejects_empty_purpose() {
        let now = Utc.with_ymd_and_hms(2024, 5, 30, 12, 0, 0).unwrap();
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();

        let result = create_booking(
            ClassroomId::new(),
            TeacherId::new(),
            start,
            end,
            "  ",
            UserId::new(),
            now,
        );

        let err = result.unwrap_err();
        assert_eq!(err, CreateBookingError::EmptyPurpose);
        assert_eq!(err.field(), "purpose");
    }

    #[test]
    fn test_create_booking_rejects_long_purpose() {
        let now = Utc.with_ymd_and_hms(2024, 5, 30, 12, 0, 0).unwrap();
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();

        let purpose = "あ".repeat(501);
        let result = create_booking(
            ClassroomId::new(),
            TeacherId::new(),
            start,
            end,
            &purpose,
            UserId::new(),
            now,
        );

        assert_eq!(result.unwrap_err(), CreateBookingError::PurposeTooLong);
    }

    // TDD: 手動遷移方針のテスト
    #[test]
    fn test_manual_transition_is_unrestricted() {
        let all = [
            BookingStatus::Pending,
            BookingStatus::Approved,
            BookingStatus::Rejected,
            BookingStatus::Cancelled,
            BookingStatus::Completed,
        ];
        // 意図的に無制限：CompletedからPendingへの復帰も許可される
        for from in all {
            for to in all {
                assert!(manual_transition_allowed(from, to));
            }
        }
    }

    #[test]
    fn test_change_status_updates_status_and_timestamp() {
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        let booking = fixture_booking(BookingStatus::Pending, end);
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 11, 0, 0).unwrap();

        let updated = change_status(&booking, BookingStatus::Approved, now).unwrap();
        assert_eq!(updated.status, BookingStatus::Approved);
        assert_eq!(updated.updated_at, now);
        // 他のフィールドは変更されない
        assert_eq!(updated.booking_id, booking.booking_id);
        assert_eq!(updated.created_at, booking.created_at);
    }

    #[test]
    fn test_change_status_allows_resurrecting_completed() {
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        let booking = fixture_booking(BookingStatus::Completed, end);
        let now = Utc.with_ymd_and_hms(2024, 6, 2, 9, 0, 0).unwrap();

        let updated = change_status(&booking, BookingStatus::Pending, now).unwrap();
        assert_eq!(updated.status, BookingStatus::Pending);
    }

    // TDD: 掃き出し判定のテスト
    #[test]
    fn test_due_for_completion_requires_approved_and_past_end() {
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        let past = end + Duration::hours(1);

        assert!(due_for_completion(
            &fixture_booking(BookingStatus::Approved, end),
            past
        ));
        // Pendingは自動では遷移しない
        assert!(!due_for_completion(
            &fixture_booking(BookingStatus::Pending, end),
            past
        ));
        // 未終了のApprovedは対象外
        assert!(!due_for_completion(
            &fixture_booking(BookingStatus::Approved, end),
            end - Duration::minutes(5)
        ));
        // 境界：ちょうど終了時刻は対象外
        assert!(!due_for_completion(
            &fixture_booking(BookingStatus::Approved, end),
            end
        ));
    }

    #[test]
    fn test_due_for_purge_requires_completed_and_past_end() {
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        let past = end + Duration::hours(25);

        assert!(due_for_purge(
            &fixture_booking(BookingStatus::Completed, end),
            past
        ));
        assert!(!due_for_purge(
            &fixture_booking(BookingStatus::Approved, end),
            past
        ));
        assert!(!due_for_purge(
            &fixture_booking(BookingStatus::Completed, end),
            end - Duration::minutes(5)
        ));
    }
}
