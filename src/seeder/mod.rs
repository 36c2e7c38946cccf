//! 合成数据种子模块
//!
//! 生成随机的分组、学生、教师、学科和成绩数据，
//! 并通过存储层在单个事务内写入。

mod names;
mod plan;

pub use plan::generate_plan;

use std::sync::Arc;

use tracing::info;

use crate::config::SeedConfig;
use crate::errors::Result;
use crate::models::seed::responses::SeedSummary;
use crate::storage::Storage;

/// 生成并插入一套随机种子数据
pub async fn seed_database(storage: &Arc<dyn Storage>, config: &SeedConfig) -> Result<SeedSummary> {
    let dataset = generate_plan(config);
    let summary = storage.insert_seed_dataset(dataset).await?;

    info!(
        "Seed dataset inserted: {} groups, {} students, {} teachers, {} subjects, {} grades",
        summary.groups, summary.students, summary.teachers, summary.subjects, summary.grades
    );

    Ok(summary)
}
