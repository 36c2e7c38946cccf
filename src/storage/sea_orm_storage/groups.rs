//! 分组存储操作

use super::SeaOrmStorage;
use crate::entity::groups::{ActiveModel, Column, Entity as Groups};
use crate::errors::{GradebookError, Result};
use crate::models::groups::{entities::Group, requests::CreateGroupRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建分组
    pub async fn create_group_impl(&self, req: CreateGroupRequest) -> Result<Group> {
        let model = ActiveModel {
            name: Set(req.name),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("创建分组失败: {e}")))?;

        Ok(result.into_group())
    }

    /// 列出全部分组（按 ID 升序）
    pub async fn list_groups_impl(&self) -> Result<Vec<Group>> {
        let rows = Groups::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("查询分组列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_group()).collect())
    }
}
