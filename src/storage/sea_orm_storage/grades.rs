//! 成绩存储操作

use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Entity as Grades};
use crate::errors::{GradebookError, Result};
use crate::models::grades::{entities::Grade, requests::CreateGradeRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

impl SeaOrmStorage {
    /// 录入单条成绩
    pub async fn create_grade_impl(&self, req: CreateGradeRequest) -> Result<Grade> {
        let model = ActiveModel {
            score: Set(req.score),
            date_received: Set(req.date_received),
            student_id: Set(req.student_id),
            subject_id: Set(req.subject_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("录入成绩失败: {e}")))?;

        Ok(result.into_grade())
    }

    /// 统计成绩数量
    pub async fn count_grades_impl(&self) -> Result<u64> {
        Grades::find()
            .count(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("统计成绩数量失败: {e}")))
    }
}
