use axum::{
    Json,
    async_trait,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::value_objects::{Actor, Role, TeacherId, UserId};

use super::types::ErrorResponse;

/// 認証ゲートウェイが転送するヘッダー名
pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";
pub const TEACHER_ID_HEADER: &str = "x-teacher-id";

/// Actor抽出の失敗
#[derive(Debug)]
pub struct AuthRejection(String);

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new("UNAUTHENTICATED", self.0));
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

fn header_value<'a>(parts: &'a Parts, name: &str) -> Result<Option<&'a str>, AuthRejection> {
    match parts.headers.get(name) {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .map(Some)
            .map_err(|_| AuthRejection(format!("Header {} is not valid UTF-8", name))),
    }
}

/// 操作コンテキストをリクエストヘッダーから一度だけ解決する
///
/// 認証自体は上流のゲートウェイ（セッションプロバイダ）の責務で、
/// このサービスは検証済みのユーザーID・ロール・教師IDを
/// ヘッダー経由で受け取る。ハンドラーごとの再取得は行わない。
#[async_trait]
impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header_value(parts, USER_ID_HEADER)?
            .ok_or_else(|| AuthRejection(format!("Missing {} header", USER_ID_HEADER)))?;
        let user_id = Uuid::parse_str(user_id)
            .map(UserId::from_uuid)
            .map_err(|_| AuthRejection(format!("Invalid {} header", USER_ID_HEADER)))?;

        let role = header_value(parts, USER_ROLE_HEADER)?
            .ok_or_else(|| AuthRejection(format!("Missing {} header", USER_ROLE_HEADER)))?;
        let role = Role::from_str(role)
            .map_err(|_| AuthRejection(format!("Invalid {} header", USER_ROLE_HEADER)))?;

        let teacher_id = match header_value(parts, TEACHER_ID_HEADER)? {
            None => None,
            Some(raw) => Some(
                Uuid::parse_str(raw)
                    .map(TeacherId::from_uuid)
                    .map_err(|_| AuthRejection(format!("Invalid {} header", TEACHER_ID_HEADER)))?,
            ),
        };

        Ok(Actor {
            user_id,
            role,
            teacher_id,
        })
    }
}
