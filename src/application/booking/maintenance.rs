use chrono::{DateTime, Utc};

use super::errors::{BookingApplicationError, Result};
use super::booking_service::ServiceDependencies;

/// 完了化タスク
///
/// スケジューラから定期的に呼び出され、終了時刻を過ぎたApprovedの予約を
/// Completedに遷移させる。
///
/// ビジネスルール：
/// - 対象は `status = approved AND end_time < now` のみ
/// - Pendingの予約は自動では遷移しない（管理者の操作を待つ）
///
/// 集合単位の一括更新1文で実行されるため、任意の間隔での実行に耐える。
/// 連続して2回実行した場合、2回目の更新件数は0（冪等・at-least-once前提）。
/// 失敗時はリトライせず、次のスケジュール実行に委ねる。
///
/// # 戻り値
/// Completedに更新した予約の件数
#[allow(dead_code)]
pub async fn complete_expired_bookings(
    deps: &ServiceDependencies,
    now: DateTime<Utc>,
) -> Result<u64> {
    let updated = deps
        .booking_store
        .complete_expired_approved(now)
        .await
        .map_err(BookingApplicationError::BookingStoreError)?;

    if updated > 0 {
        tracing::info!(count = updated, "expired approved bookings marked completed");
    }

    Ok(updated)
}

/// 削除タスク
///
/// スケジューラから定期的に呼び出され、終了時刻を過ぎたCompletedの予約を
/// ハード削除する（ステータス遷移ではなくガベージコレクション）。
///
/// 完了化タスクとは述語が互いに素（approved+過去 vs completed+過去）なので、
/// 並行実行しても競合しない。一括削除1文で実行され、冪等。
///
/// # 戻り値
/// 削除した予約の件数
#[allow(dead_code)]
pub async fn purge_expired_bookings(
    deps: &ServiceDependencies,
    now: DateTime<Utc>,
) -> Result<u64> {
    let deleted = deps
        .booking_store
        .purge_expired_completed(now)
        .await
        .map_err(BookingApplicationError::BookingStoreError)?;

    if deleted > 0 {
        tracing::info!(count = deleted, "expired completed bookings purged");
    }

    Ok(deleted)
}
