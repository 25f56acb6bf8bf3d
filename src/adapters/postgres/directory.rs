use crate::domain::value_objects::{ClassroomId, TeacherId};
use crate::ports::classroom_directory::{
    ClassroomDirectory as ClassroomDirectoryTrait, Result as ClassroomResult,
};
use crate::ports::teacher_directory::{
    TeacherDirectory as TeacherDirectoryTrait, Result as TeacherResult,
};
use async_trait::async_trait;
use sqlx::{PgPool, Row};

fn not_found(what: &str) -> Box<dyn std::error::Error + Send + Sync> {
    Box::new(std::io::Error::new(std::io::ErrorKind::NotFound, what.to_string()))
}

/// ClassroomDirectoryのPostgreSQL実装
///
/// 教室マスタテーブルへの存在確認と表示名取得のみを提供する。
#[allow(dead_code)]
pub struct ClassroomDirectory {
    pool: PgPool,
}

#[allow(dead_code)]
impl ClassroomDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassroomDirectoryTrait for ClassroomDirectory {
    async fn exists(&self, classroom_id: ClassroomId) -> ClassroomResult<bool> {
        let row = sqlx::query(
            "SELECT EXISTS(SELECT 1 FROM classrooms WHERE classroom_id = $1) AS present",
        )
        .bind(classroom_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get("present"))
    }

    async fn get_name(&self, classroom_id: ClassroomId) -> ClassroomResult<String> {
        let row = sqlx::query("SELECT name FROM classrooms WHERE classroom_id = $1")
            .bind(classroom_id.value())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.get("name"))
            .ok_or_else(|| not_found("classroom not found"))
    }
}

/// TeacherDirectoryのPostgreSQL実装
#[allow(dead_code)]
pub struct TeacherDirectory {
    pool: PgPool,
}

#[allow(dead_code)]
impl TeacherDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeacherDirectoryTrait for TeacherDirectory {
    async fn exists(&self, teacher_id: TeacherId) -> TeacherResult<bool> {
        let row = sqlx::query(
            "SELECT EXISTS(SELECT 1 FROM teachers WHERE teacher_id = $1) AS present",
        )
        .bind(teacher_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get("present"))
    }

    async fn get_name(&self, teacher_id: TeacherId) -> TeacherResult<String> {
        let row = sqlx::query("SELECT name FROM teachers WHERE teacher_id = $1")
            .bind(teacher_id.value())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.get("name"))
            .ok_or_else(|| not_found("teacher not found"))
    }
}
