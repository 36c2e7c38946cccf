use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    // 学科ID
    pub id: i64,
    // 学科名称
    pub name: String,
    // 任课教师ID（可以暂无教师）
    pub teacher_id: Option<i64>,
}
