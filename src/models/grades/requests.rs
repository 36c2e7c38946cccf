use chrono::NaiveDate;
use serde::Deserialize;

// 创建成绩请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGradeRequest {
    pub score: f64,
    pub date_received: NaiveDate,
    pub student_id: i64,
    pub subject_id: i64,
}
