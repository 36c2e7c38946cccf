use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    // 成绩ID
    pub id: i64,
    // 分数
    pub score: f64,
    // 获得日期
    pub date_received: NaiveDate,
    // 学生ID
    pub student_id: i64,
    // 学科ID
    pub subject_id: i64,
}
