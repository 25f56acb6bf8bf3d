use crate::domain::booking::Booking;
use crate::domain::value_objects::{
    BookingId, BookingStatus, ClassroomId, TeacherId, UserId,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 予約ビュー（一覧・詳細表示用）
///
/// 教室・教師の表示名を結合した非正規化ビュー。
/// カレンダー表示と一覧画面のクエリに最適化されている。
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct BookingView {
    pub booking_id: BookingId,
    pub classroom_id: ClassroomId,
    pub classroom_name: String,
    pub teacher_id: TeacherId,
    pub teacher_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub purpose: String,
    pub status: BookingStatus,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 予約ストアポート
///
/// 予約の永続化と、メンテナンスタスクが使う集合単位の一括更新・削除を提供する。
/// 一括操作はストレージ層で1文ずつアトミックに実行されることを前提とし、
/// プロセス内でのロックは行わない。
#[allow(dead_code)]
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// 予約を新規保存する
    ///
    /// ステータスはドメイン層でPendingに固定済み。
    /// 参照先の教室・教師が存在しない場合はストレージ層のエラーになる。
    async fn insert(&self, booking: Booking) -> Result<()>;

    /// IDで予約を取得する
    async fn get_by_id(&self, booking_id: BookingId) -> Result<Option<Booking>>;

    /// IDで予約を表示名付きで取得する（詳細画面用）
    async fn get_view_by_id(&self, booking_id: BookingId) -> Result<Option<BookingView>>;

    /// 予約のステータスを更新する
    ///
    /// 該当行がない場合はfalseを返す。楽観ロックは行わず、
    /// 掃き出しタスクと競合した場合は後勝ち（last-write-wins）。
    async fn update_status(
        &self,
        booking_id: BookingId,
        status: BookingStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool>;

    /// 一括更新：終了時刻を過ぎたApprovedの予約をCompletedにする
    ///
    /// `status = approved AND end_time < now` を対象とした
    /// 単一の集合更新。更新件数を返す。連続実行しても2回目は0件（冪等）。
    async fn complete_expired_approved(&self, now: DateTime<Utc>) -> Result<u64>;

    /// 一括削除：終了時刻を過ぎたCompletedの予約をハード削除する
    ///
    /// `status = completed AND end_time < now` を対象とした
    /// 単一の集合削除。削除件数を返す。連続実行しても2回目は0件（冪等）。
    async fn purge_expired_completed(&self, now: DateTime<Utc>) -> Result<u64>;

    /// 全予約を表示名付きで取得する（管理者スコープ）
    ///
    /// ステータスフィルタはオプション。開始時刻の昇順で返す。
    async fn find_all(&self, status: Option<BookingStatus>) -> Result<Vec<BookingView>>;

    /// 教師の予約を表示名付きで取得する（教師スコープ）
    async fn find_by_teacher(
        &self,
        teacher_id: TeacherId,
        status: Option<BookingStatus>,
    ) -> Result<Vec<BookingView>>;
}
