use serde::Deserialize;

// 创建学科请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubjectRequest {
    pub name: String,
    pub teacher_id: Option<i64>,
}
