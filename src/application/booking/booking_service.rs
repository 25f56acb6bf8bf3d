use crate::domain::{self, commands::*, value_objects::*};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{BookingApplicationError, Result};

/// サービスの依存関係
///
/// データ構造として定義し、振る舞い（メソッド）は持たない。
/// 依存関係を純粋な関数に明示的に渡すことで：
/// - すべての依存が明示的
/// - データと振る舞いの分離
/// - テストが明確
#[derive(Clone)]
#[allow(dead_code)]
pub struct ServiceDependencies {
    pub booking_store: Arc<dyn BookingStore>,
    pub classroom_directory: Arc<dyn ClassroomDirectory>,
    pub teacher_directory: Arc<dyn TeacherDirectory>,
}

/// 予約を作成する
///
/// ビジネスルール：
/// - 管理者は任意の教師の予約を作成できる
/// - 教師は自分自身の予約のみ作成できる
/// - 教室・教師が存在すること
/// - 時間範囲と利用目的がバリデーションを通過すること（ドメイン層）
///
/// 重複予約（同一教室・時間帯の重なり）の検出は現行仕様では行わない。
///
/// # 引数
/// * `deps` - サービスの依存関係
/// * `actor` - リクエストごとに解決された操作コンテキスト
/// * `cmd` - 作成コマンド
///
/// # 戻り値
/// 成功時は作成された予約のID
#[allow(dead_code)]
pub async fn create_booking(
    deps: &ServiceDependencies,
    actor: Actor,
    cmd: CreateBooking,
) -> Result<BookingId> {
    // 1. 認可：教師は自分の予約のみ
    if !actor.can_act_for(cmd.teacher_id) {
        return Err(BookingApplicationError::NotAuthorized);
    }

    // 2. 教室の存在確認
    let classroom_exists = deps
        .classroom_directory
        .exists(cmd.classroom_id)
        .await
        .map_err(BookingApplicationError::ClassroomDirectoryError)?;

    if !classroom_exists {
        return Err(BookingApplicationError::ClassroomNotFound);
    }

    // 3. 教師の存在確認
    let teacher_exists = deps
        .teacher_directory
        .exists(cmd.teacher_id)
        .await
        .map_err(BookingApplicationError::TeacherDirectoryError)?;

    if !teacher_exists {
        return Err(BookingApplicationError::TeacherNotFound);
    }

    // 4. ドメイン層の純粋関数を呼び出し（Booking Validator）
    let booking = domain::booking::create_booking(
        cmd.classroom_id,
        cmd.teacher_id,
        cmd.start_time,
        cmd.end_time,
        &cmd.purpose,
        actor.user_id,
        cmd.requested_at,
    )
    .map_err(BookingApplicationError::Validation)?;

    let booking_id = booking.booking_id;

    // 5. ストアに保存
    deps.booking_store
        .insert(booking)
        .await
        .map_err(BookingApplicationError::BookingStoreError)?;

    tracing::info!(booking_id = %booking_id.value(), "booking created");

    Ok(booking_id)
}

/// 予約ステータスを変更する（管理者のみ）
///
/// ビジネスルール：
/// - 管理者のみ実行可能
/// - 予約が存在すること
/// - 遷移は方針関数を通過すること（現行方針では任意の遷移が可能）
///
/// ストレージエラー時はステータスは変更されないままになる。
///
/// # 引数
/// * `deps` - サービスの依存関係
/// * `actor` - 操作コンテキスト
/// * `cmd` - ステータス変更コマンド
#[allow(dead_code)]
pub async fn change_booking_status(
    deps: &ServiceDependencies,
    actor: Actor,
    cmd: ChangeBookingStatus,
) -> Result<()> {
    // 1. 認可：ステータス変更は管理者のみ
    if !actor.is_admin() {
        return Err(BookingApplicationError::NotAuthorized);
    }

    // 2. 予約を取得
    let booking = deps
        .booking_store
        .get_by_id(cmd.booking_id)
        .await
        .map_err(BookingApplicationError::BookingStoreError)?
        .ok_or(BookingApplicationError::BookingNotFound)?;

    // 3. ドメイン層の純粋関数で遷移を検証
    let updated = domain::booking::change_status(&booking, cmd.new_status, cmd.changed_at)
        .map_err(|e| BookingApplicationError::DomainError(format!("{:?}", e)))?;

    // 4. ストアに反映
    let found = deps
        .booking_store
        .update_status(updated.booking_id, updated.status, updated.updated_at)
        .await
        .map_err(BookingApplicationError::BookingStoreError)?;

    // 取得と更新の間に掃き出しタスクが行を削除した場合
    if !found {
        return Err(BookingApplicationError::BookingNotFound);
    }

    tracing::info!(
        booking_id = %cmd.booking_id.value(),
        from = booking.status.as_str(),
        to = cmd.new_status.as_str(),
        "booking status changed"
    );

    Ok(())
}

/// 予約詳細を取得する
///
/// 管理者は任意の予約、教師は自分の予約のみ閲覧できる。
#[allow(dead_code)]
pub async fn get_booking(
    deps: &ServiceDependencies,
    actor: Actor,
    booking_id: BookingId,
) -> Result<BookingView> {
    let view = deps
        .booking_store
        .get_view_by_id(booking_id)
        .await
        .map_err(BookingApplicationError::BookingStoreError)?
        .ok_or(BookingApplicationError::BookingNotFound)?;

    if !actor.can_act_for(view.teacher_id) {
        return Err(BookingApplicationError::NotAuthorized);
    }

    Ok(view)
}

/// 予約一覧を取得する
///
/// 管理者スコープでは全予約、教師スコープでは自分の予約のみを返す。
/// ステータスフィルタはオプション。
#[allow(dead_code)]
pub async fn list_bookings(
    deps: &ServiceDependencies,
    actor: Actor,
    status: Option<BookingStatus>,
) -> Result<Vec<BookingView>> {
    let views = if actor.is_admin() {
        deps.booking_store
            .find_all(status)
            .await
            .map_err(BookingApplicationError::BookingStoreError)?
    } else {
        // 教師ロールでteacher_idが未解決の場合は閲覧対象なし
        let Some(teacher_id) = actor.teacher_id else {
            return Ok(Vec::new());
        };
        deps.booking_store
            .find_by_teacher(teacher_id, status)
            .await
            .map_err(BookingApplicationError::BookingStoreError)?
    };

    Ok(views)
}
