use crate::domain::value_objects::ClassroomId;
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 教室ディレクトリポート
///
/// 予約コンテキストと教室マスタコンテキストの境界を維持する。
/// 予約コンテキストはClassroomIDのみを知り、設備や収容人数などの詳細は知らない。
#[allow(dead_code)]
#[async_trait]
pub trait ClassroomDirectory: Send + Sync {
    /// 教室が存在するか確認する
    ///
    /// 予約作成前の参照先バリデーションに使用される。
    async fn exists(&self, classroom_id: ClassroomId) -> Result<bool>;

    /// 教室の表示名を取得する
    ///
    /// カレンダーや一覧でわかりやすい表示をするために使用される。
    async fn get_name(&self, classroom_id: ClassroomId) -> Result<String>;
}
