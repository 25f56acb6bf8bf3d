#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 予約ID - 教室予約コンテキストの集約ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(Uuid);

impl BookingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

/// 教室ID - 教室マスタコンテキストへの参照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassroomId(Uuid);

impl ClassroomId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for ClassroomId {
    fn default() -> Self {
        Self::new()
    }
}

/// 教師ID - 教師マスタコンテキストへの参照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeacherId(Uuid);

impl TeacherId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for TeacherId {
    fn default() -> Self {
        Self::new()
    }
}

/// ユーザーID - 認証コンテキストへの参照（予約の作成者）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

/// 操作者のロール
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// 管理者（全予約の閲覧・任意のステータス変更が可能）
    Admin,
    /// 教師（自分の予約のみ作成・閲覧可能）
    Teacher,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "teacher" => Ok(Role::Teacher),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// 操作コンテキスト
///
/// リクエストごとに一度だけ解決され、すべての操作に明示的に渡される。
/// グローバルなセッション状態を持たないための設計。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: UserId,
    pub role: Role,
    /// 教師ロールの場合の教師ID。管理者はNoneの場合がある。
    pub teacher_id: Option<TeacherId>,
}

impl Actor {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// 指定した教師の予約を操作できるか
    ///
    /// 管理者は常に可。教師は自分自身の予約のみ。
    pub fn can_act_for(&self, teacher_id: TeacherId) -> bool {
        self.is_admin() || self.teacher_id == Some(teacher_id)
    }
}

/// 予約ステータス
///
/// Pendingで作成され、管理者の手動編集と定期メンテナンスタスクによって
/// 遷移する。遷移の方針はdomain::booking側で明示的に定義する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// 承認待ち（初期状態）
    Pending,
    /// 承認済み
    Approved,
    /// 却下
    Rejected,
    /// 取り消し
    Cancelled,
    /// 完了（終了時刻経過後、さらに経過するとハード削除の対象）
    Completed,
}

impl BookingStatus {
    /// 文字列表現を取得する（ストレージ・APIの境界で使用）
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "approved" => Ok(BookingStatus::Approved),
            "rejected" => Ok(BookingStatus::Rejected),
            "cancelled" => Ok(BookingStatus::Cancelled),
            "completed" => Ok(BookingStatus::Completed),
            _ => Err(format!("Invalid booking status: {}", s)),
        }
    }
}

/// 利用目的のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurposeError {
    /// 空文字（空白のみを含む）
    Empty,
    /// 500文字を超えた
    TooLong,
}

/// 利用目的の最大文字数
pub const PURPOSE_MAX_CHARS: usize = 500;

/// 利用目的
///
/// 不変条件：1〜500文字。型システムでこの制約を強制し、
/// 空文字や過長な値を作成できないようにする。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purpose(String);

impl Purpose {
    /// バリデーション付きで作成する
    ///
    /// # エラー
    /// - 空白のみ・空文字の場合は`PurposeError::Empty`
    /// - 500文字を超える場合は`PurposeError::TooLong`
    pub fn new(value: impl Into<String>) -> Result<Self, PurposeError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(PurposeError::Empty);
        }
        if value.chars().count() > PURPOSE_MAX_CHARS {
            return Err(PurposeError::TooLong);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Purpose {
    type Error = PurposeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// 時間範囲のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeRangeError {
    /// 終了時刻が開始時刻より後でない
    EndNotAfterStart,
}

/// 予約の時間範囲
///
/// 不変条件：end は start より厳密に後。
/// 入力された壁時計の日時をそのまま保持する（タイムゾーン正規化は行わない）。
/// 開始・終了とも同じ規約なので前後判定は自己完結する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    /// バリデーション付きで作成する
    ///
    /// # エラー
    /// `end <= start` の場合は`TimeRangeError::EndNotAfterStart`。
    /// このエラーはフォーム上では終了時刻フィールドに表示される。
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TimeRangeError> {
        if end <= start {
            return Err(TimeRangeError::EndNotAfterStart);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// 範囲が終了しているか（掃き出しタスクの判定に使用）
    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        now > self.end
    }
}
