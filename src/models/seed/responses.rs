use serde::Serialize;

/// 种子数据插入结果统计
#[derive(Debug, Clone, Serialize)]
pub struct SeedSummary {
    pub groups: u64,
    pub students: u64,
    pub teachers: u64,
    pub subjects: u64,
    pub grades: u64,
}
