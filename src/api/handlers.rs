use crate::application::booking::{
    ServiceDependencies, change_booking_status as execute_change_status,
    complete_expired_bookings, create_booking as execute_create_booking,
    get_booking as execute_get_booking, list_bookings as execute_list_bookings,
    purge_expired_bookings,
};
use crate::domain::commands::ChangeBookingStatus;
use crate::domain::value_objects::{Actor, BookingId, BookingStatus};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use super::{
    error::ApiError,
    types::{
        BookingCreatedResponse, BookingResponse, BookingStatusChangedResponse,
        CompleteExpiredResponse, CreateBookingRequest, ListBookingsQuery, PurgeCompletedResponse,
        UpdateBookingStatusRequest, parse_status_filter,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers (POST / PUT)
// ============================================================================

/// POST /bookings - 新しい予約を作成
///
/// 日付+時刻のフィールドを2つの絶対時刻に合成し、バリデーションを
/// 通過した予約をPendingで保存する。
///
/// 強制されるビジネスルール:
/// - 教師は自分自身の予約のみ作成できる（管理者は任意）
/// - 教室・教師が存在すること
/// - 終了時刻が開始時刻より後であること
/// - 利用目的が1〜500文字であること
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingCreatedResponse>), ApiError> {
    let cmd = req.to_command(chrono::Utc::now());

    let start_time = cmd.start_time;
    let end_time = cmd.end_time;
    let booking_id = execute_create_booking(&state.service_deps, actor, cmd).await?;

    let response = BookingCreatedResponse {
        booking_id: booking_id.value(),
        status: BookingStatus::Pending,
        start_time,
        end_time,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /bookings/:id/status - 予約ステータスを変更（管理者のみ）
///
/// 編集ダイアログからの手動遷移。現行方針では任意の2ステータス間の
/// 移動が許可される。ストレージエラー時はステータスは変更されない。
pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Path(booking_id): Path<Uuid>,
    Json(req): Json<UpdateBookingStatusRequest>,
) -> Result<Json<BookingStatusChangedResponse>, ApiError> {
    let booking_id = BookingId::from_uuid(booking_id);

    let cmd = ChangeBookingStatus {
        booking_id,
        new_status: req.status,
        changed_at: chrono::Utc::now(),
    };

    execute_change_status(&state.service_deps, actor, cmd).await?;

    let response = BookingStatusChangedResponse {
        booking_id: booking_id.value(),
        status: req.status,
    };

    Ok(Json(response))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /bookings/:id - 予約詳細をIDで取得
///
/// 管理者は任意の予約、教師は自分の予約のみ閲覧できる。
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<BookingResponse>, ApiError> {
    let booking_id = BookingId::from_uuid(booking_id);

    let view = execute_get_booking(&state.service_deps, actor, booking_id).await?;

    Ok(Json(BookingResponse::from(view)))
}

/// GET /bookings - オプションフィルタ付き予約一覧取得
///
/// クエリパラメータ:
/// - status: ステータスでフィルタリング（オプション）
///
/// スコープは操作者のロールで決まる：管理者は全予約、教師は自分の予約のみ。
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    actor: Actor,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let status = match &query.status {
        Some(raw) => Some(parse_status_filter(raw).map_err(ApiError::BadRequest)?),
        None => None,
    };

    let views = execute_list_bookings(&state.service_deps, actor, status).await?;

    Ok(Json(views.into_iter().map(BookingResponse::from).collect()))
}

// ============================================================================
// Maintenance task handlers (scheduler-invoked)
// ============================================================================

/// POST /tasks/complete-expired - 完了化タスク
///
/// 終了時刻を過ぎたApprovedの予約をCompletedに一括更新する。
/// スケジューラから定期的に呼び出される。実行間隔は運用側の設定で、
/// 連続実行しても2回目の更新件数は0（冪等）。
/// 失敗時は500を返し、リトライは次のスケジュール実行に委ねる。
pub async fn complete_expired(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CompleteExpiredResponse>, ApiError> {
    let updated_count =
        complete_expired_bookings(&state.service_deps, chrono::Utc::now()).await?;

    Ok(Json(CompleteExpiredResponse { updated_count }))
}

/// POST /tasks/purge-completed - 削除タスク
///
/// 終了時刻を過ぎたCompletedの予約をハード削除する（ガベージコレクション）。
/// 完了化タスクとは対象の述語が互いに素なので並行実行しても安全。
pub async fn purge_completed(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PurgeCompletedResponse>, ApiError> {
    let deleted_count = purge_expired_bookings(&state.service_deps, chrono::Utc::now()).await?;

    Ok(Json(PurgeCompletedResponse { deleted_count }))
}
