use crate::domain::value_objects::TeacherId;
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 教師ディレクトリポート
///
/// 予約コンテキストと教師マスタコンテキストの境界を維持する。
/// 予約コンテキストはTeacherIDのみを知り、教師詳細は知らない。
#[allow(dead_code)]
#[async_trait]
pub trait TeacherDirectory: Send + Sync {
    /// 教師が存在するか確認する
    ///
    /// 予約作成前の参照先バリデーションに使用される。
    async fn exists(&self, teacher_id: TeacherId) -> Result<bool>;

    /// 教師の表示名を取得する
    async fn get_name(&self, teacher_id: TeacherId) -> Result<String>;
}
