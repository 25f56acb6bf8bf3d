#![allow(dead_code)]

use super::{BookingStatus, PurposeError, TimeRangeError};

/// 予約作成のエラー
///
/// フォームのフィールド単位で表示するため、各バリアントは
/// 対応する入力フィールドのパスを持つ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateBookingError {
    /// 終了時刻が開始時刻より後でない
    EndNotAfterStart,
    /// 利用目的が空
    EmptyPurpose,
    /// 利用目的が500文字を超えた
    PurposeTooLong,
}

impl CreateBookingError {
    /// エラーを表示すべき入力フィールドのパス
    pub fn field(&self) -> &'static str {
        match self {
            CreateBookingError::EndNotAfterStart => "end_time",
            CreateBookingError::EmptyPurpose | CreateBookingError::PurposeTooLong => "purpose",
        }
    }

    /// 利用者向けメッセージ
    pub fn message(&self) -> &'static str {
        match self {
            CreateBookingError::EndNotAfterStart => "End time must be after start time",
            CreateBookingError::EmptyPurpose => "Purpose must not be empty",
            CreateBookingError::PurposeTooLong => "Purpose must be at most 500 characters",
        }
    }
}

impl From<TimeRangeError> for CreateBookingError {
    fn from(err: TimeRangeError) -> Self {
        match err {
            TimeRangeError::EndNotAfterStart => CreateBookingError::EndNotAfterStart,
        }
    }
}

impl From<PurposeError> for CreateBookingError {
    fn from(err: PurposeError) -> Self {
        match err {
            PurposeError::Empty => CreateBookingError::EmptyPurpose,
            PurposeError::TooLong => CreateBookingError::PurposeTooLong,
        }
    }
}

/// ステータス変更のエラー
///
/// 現行の方針（管理者は任意の遷移が可能）では発生しないが、
/// 遷移方針を将来制限する場合の明示的な拡張点として定義しておく。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeStatusError {
    /// 方針で許可されていない遷移
    TransitionNotAllowed {
        from: BookingStatus,
        to: BookingStatus,
    },
}
