use crate::domain::value_objects::TeacherId;
use crate::ports::teacher_directory::{Result, TeacherDirectory as TeacherDirectoryTrait};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// TeacherDirectoryのモック実装
///
/// 教師IDと表示名を保持することで状態を持ったテストをサポート。
#[allow(dead_code)]
pub struct TeacherDirectory {
    teachers: Mutex<HashMap<TeacherId, String>>,
}

#[allow(dead_code)]
impl TeacherDirectory {
    pub fn new() -> Self {
        Self {
            teachers: Mutex::new(HashMap::new()),
        }
    }

    /// テスト用に教師を登録
    pub fn add_teacher(&self, teacher_id: TeacherId, name: impl Into<String>) {
        self.teachers.lock().unwrap().insert(teacher_id, name.into());
    }
}

impl Default for TeacherDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TeacherDirectoryTrait for TeacherDirectory {
    /// 登録された教師の中で存在するかチェック
    async fn exists(&self, teacher_id: TeacherId) -> Result<bool> {
        Ok(self.teachers.lock().unwrap().contains_key(&teacher_id))
    }

    /// 登録された表示名を返す（未登録ならプレースホルダ）
    async fn get_name(&self, teacher_id: TeacherId) -> Result<String> {
        Ok(self
            .teachers
            .lock()
            .unwrap()
            .get(&teacher_id)
            .cloned()
            .unwrap_or_else(|| "Mock Teacher".to_string()))
    }
}
