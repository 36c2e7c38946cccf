use serde::Serialize;

/// 学生平均分
#[derive(Debug, Clone, Serialize)]
pub struct StudentAverage {
    pub student_name: String,
    pub avg_score: f64,
}

/// 分组平均分
#[derive(Debug, Clone, Serialize)]
pub struct GroupAverage {
    pub group_name: String,
    pub avg_score: f64,
}

/// 学生单科成绩
#[derive(Debug, Clone, Serialize)]
pub struct StudentScore {
    pub student_name: String,
    pub score: f64,
}
