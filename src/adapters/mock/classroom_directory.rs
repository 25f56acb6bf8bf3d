use crate::domain::value_objects::ClassroomId;
use crate::ports::classroom_directory::{ClassroomDirectory as ClassroomDirectoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// ClassroomDirectoryのモック実装
///
/// 教室IDと表示名を保持することで状態を持ったテストをサポート。
#[allow(dead_code)]
pub struct ClassroomDirectory {
    classrooms: Mutex<HashMap<ClassroomId, String>>,
}

#[allow(dead_code)]
impl ClassroomDirectory {
    pub fn new() -> Self {
        Self {
            classrooms: Mutex::new(HashMap::new()),
        }
    }

    /// テスト用に教室を登録
    pub fn add_classroom(&self, classroom_id: ClassroomId, name: impl Into<String>) {
        self.classrooms
            .lock()
            .unwrap()
            .insert(classroom_id, name.into());
    }
}

impl Default for ClassroomDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClassroomDirectoryTrait for ClassroomDirectory {
    /// 登録された教室の中で存在するかチェック
    async fn exists(&self, classroom_id: ClassroomId) -> Result<bool> {
        Ok(self.classrooms.lock().unwrap().contains_key(&classroom_id))
    }

    /// 登録された表示名を返す（未登録ならプレースホルダ）
    async fn get_name(&self, classroom_id: ClassroomId) -> Result<String> {
        Ok(self
            .classrooms
            .lock()
            .unwrap()
            .get(&classroom_id)
            .cloned()
            .unwrap_or_else(|| "Mock Classroom".to_string()))
    }
}
