use crate::domain::booking::Booking;
use crate::domain::value_objects::{
    BookingId, BookingStatus, ClassroomId, Purpose, TeacherId, UserId,
};
use crate::ports::booking_store::{
    BookingStore as BookingStoreTrait, BookingView, Result,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};
use std::str::FromStr;

/// PostgreSQLの行データをBookingに変換する
///
/// statusの文字列からの変換とpurposeの再バリデーションで
/// エラーハンドリングを行う。外部データが核に入る境界はここ。
fn map_row_to_booking(row: &PgRow) -> Result<Booking> {
    let status_str: &str = row.get("status");
    let status = BookingStatus::from_str(status_str).map_err(|e| {
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            as Box<dyn std::error::Error + Send + Sync>
    })?;

    let purpose_str: String = row.get("purpose");
    let purpose = Purpose::new(purpose_str).map_err(|e| {
        Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("invalid purpose in storage: {:?}", e),
        )) as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(Booking {
        booking_id: BookingId::from_uuid(row.get("booking_id")),
        classroom_id: ClassroomId::from_uuid(row.get("classroom_id")),
        teacher_id: TeacherId::from_uuid(row.get("teacher_id")),
        start_time: row.get("start_time"),
        end_time: row.get("end_time"),
        purpose,
        status,
        created_by: UserId::from_uuid(row.get("created_by")),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

/// PostgreSQLの行データをBookingViewに変換する
///
/// 教室・教師の表示名を結合したクエリの結果行を想定。
fn map_row_to_booking_view(row: &PgRow) -> Result<BookingView> {
    let status_str: &str = row.get("status");
    let status = BookingStatus::from_str(status_str).map_err(|e| {
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            as Box<dyn std::error::Error + Send + Sync>
    })?;

    Ok(BookingView {
        booking_id: BookingId::from_uuid(row.get("booking_id")),
        classroom_id: ClassroomId::from_uuid(row.get("classroom_id")),
        classroom_name: row.get("classroom_name"),
        teacher_id: TeacherId::from_uuid(row.get("teacher_id")),
        teacher_name: row.get("teacher_name"),
        start_time: row.get("start_time"),
        end_time: row.get("end_time"),
        purpose: row.get("purpose"),
        status,
        created_by: UserId::from_uuid(row.get("created_by")),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

/// BookingStoreのPostgreSQL実装
///
/// メンテナンスタスクの一括更新・削除は単一のUPDATE/DELETE文で実行され、
/// ステートメント単位のアトミック性に依存する。プロセス内ロックは持たない。
#[allow(dead_code)]
pub struct BookingStore {
    pool: PgPool,
}

#[allow(dead_code)]
impl BookingStore {
    /// PostgreSQLコネクションプールから新しいBookingStoreを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStoreTrait for BookingStore {
    /// 予約を新規保存
    ///
    /// 参照先の教室・教師が存在しない場合は外部キー違反として
    /// ストレージ層のエラーになる（特別扱いはしない）。
    async fn insert(&self, booking: Booking) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO bookings (
                booking_id,
                classroom_id,
                teacher_id,
                start_time,
                end_time,
                purpose,
                status,
                created_by,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(booking.booking_id.value())
        .bind(booking.classroom_id.value())
        .bind(booking.teacher_id.value())
        .bind(booking.start_time)
        .bind(booking.end_time)
        .bind(booking.purpose.value())
        .bind(booking.status.as_str())
        .bind(booking.created_by.value())
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// IDで予約を取得
    async fn get_by_id(&self, booking_id: BookingId) -> Result<Option<Booking>> {
        let row = sqlx::query(
            r#"
            SELECT
                booking_id,
                classroom_id,
                teacher_id,
                start_time,
                end_time,
                purpose,
                status,
                created_by,
                created_at,
                updated_at
            FROM bookings
            WHERE booking_id = $1
            "#,
        )
        .bind(booking_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_booking).transpose()
    }

    /// IDで予約を表示名付きで取得（詳細画面用）
    async fn get_view_by_id(&self, booking_id: BookingId) -> Result<Option<BookingView>> {
        let row = sqlx::query(
            r#"
            SELECT
                b.booking_id,
                b.classroom_id,
                c.name AS classroom_name,
                b.teacher_id,
                t.name AS teacher_name,
                b.start_time,
                b.end_time,
                b.purpose,
                b.status,
                b.created_by,
                b.created_at,
                b.updated_at
            FROM bookings b
            JOIN classrooms c ON c.classroom_id = b.classroom_id
            JOIN teachers t ON t.teacher_id = b.teacher_id
            WHERE b.booking_id = $1
            "#,
        )
        .bind(booking_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_booking_view).transpose()
    }

    /// ステータスを更新（該当行がなければfalse）
    ///
    /// 楽観ロックは行わない。掃き出しタスクと競合した場合は後勝ち。
    async fn update_status(
        &self,
        booking_id: BookingId,
        status: BookingStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE bookings
            SET status = $2, updated_at = $3
            WHERE booking_id = $1
            "#,
        )
        .bind(booking_id.value())
        .bind(status.as_str())
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// 一括更新：終了時刻を過ぎたApprovedをCompletedに
    ///
    /// 単一のUPDATE文なので任意の間隔・並行実行に耐える（冪等）。
    /// (status, end_time)の部分インデックスを使用してパフォーマンスを最適化。
    async fn complete_expired_approved(&self, now: DateTime<Utc>) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE bookings
            SET status = 'completed', updated_at = $1
            WHERE status = 'approved' AND end_time < $1
            "#,
        )
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// 一括削除：終了時刻を過ぎたCompletedをハード削除
    async fn purge_expired_completed(&self, now: DateTime<Utc>) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM bookings
            WHERE status = 'completed' AND end_time < $1
            "#,
        )
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// 全予約を表示名付きで取得（管理者スコープ）
    async fn find_all(&self, status: Option<BookingStatus>) -> Result<Vec<BookingView>> {
        let rows = match status {
            Some(status) => {
                sqlx::query(
                    r#"
                    SELECT
                        b.booking_id,
                        b.classroom_id,
                        c.name AS classroom_name,
                        b.teacher_id,
                        t.name AS teacher_name,
                        b.start_time,
                        b.end_time,
                        b.purpose,
                        b.status,
                        b.created_by,
                        b.created_at,
                        b.updated_at
                    FROM bookings b
                    JOIN classrooms c ON c.classroom_id = b.classroom_id
                    JOIN teachers t ON t.teacher_id = b.teacher_id
                    WHERE b.status = $1
                    ORDER BY b.start_time ASC
                    "#,
                )
                .bind(status.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT
                        b.booking_id,
                        b.classroom_id,
                        c.name AS classroom_name,
                        b.teacher_id,
                        t.name AS teacher_name,
                        b.start_time,
                        b.end_time,
                        b.purpose,
                        b.status,
                        b.created_by,
                        b.created_at,
                        b.updated_at
                    FROM bookings b
                    JOIN classrooms c ON c.classroom_id = b.classroom_id
                    JOIN teachers t ON t.teacher_id = b.teacher_id
                    ORDER BY b.start_time ASC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.iter().map(map_row_to_booking_view).collect()
    }

    /// 教師の予約を表示名付きで取得（教師スコープ）
    async fn find_by_teacher(
        &self,
        teacher_id: TeacherId,
        status: Option<BookingStatus>,
    ) -> Result<Vec<BookingView>> {
        let rows = match status {
            Some(status) => {
                sqlx::query(
                    r#"
                    SELECT
                        b.booking_id,
                        b.classroom_id,
                        c.name AS classroom_name,
                        b.teacher_id,
                        t.name AS teacher_name,
                        b.start_time,
                        b.end_time,
                        b.purpose,
                        b.status,
                        b.created_by,
                        b.created_at,
                        b.updated_at
                    FROM bookings b
                    JOIN classrooms c ON c.classroom_id = b.classroom_id
                    JOIN teachers t ON t.teacher_id = b.teacher_id
                    WHERE b.teacher_id = $1 AND b.status = $2
                    ORDER BY b.start_time ASC
                    "#,
                )
                .bind(teacher_id.value())
                .bind(status.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT
                        b.booking_id,
                        b.classroom_id,
                        c.name AS classroom_name,
                        b.teacher_id,
                        t.name AS teacher_name,
                        b.start_time,
                        b.end_time,
                        b.purpose,
                        b.status,
                        b.created_by,
                        b.created_at,
                        b.updated_at
                    FROM bookings b
                    JOIN classrooms c ON c.classroom_id = b.classroom_id
                    JOIN teachers t ON t.teacher_id = b.teacher_id
                    WHERE b.teacher_id = $1
                    ORDER BY b.start_time ASC
                    "#,
                )
                .bind(teacher_id.value())
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.iter().map(map_row_to_booking_view).collect()
    }
}
