//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Entity as Students};
use crate::errors::{GradebookError, Result};
use crate::models::students::{entities::Student, requests::CreateStudentRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let model = ActiveModel {
            name: Set(req.name),
            group_id: Set(req.group_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 统计学生数量
    pub async fn count_students_impl(&self) -> Result<u64> {
        Students::find()
            .count(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("统计学生数量失败: {e}")))
    }
}
