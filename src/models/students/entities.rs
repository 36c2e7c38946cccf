use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    // 学生ID
    pub id: i64,
    // 学生姓名
    pub name: String,
    // 所属分组ID（可以没有分组）
    pub group_id: Option<i64>,
}
