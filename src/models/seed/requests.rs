use chrono::NaiveDate;
use serde::Deserialize;

// 待插入的整套种子数据
//
// 学生、学科、成绩之间的外键用下标引用表示，
// 插入时在同一个事务内解析为真实的数据库ID。
#[derive(Debug, Clone, Deserialize)]
pub struct SeedDataset {
    pub groups: Vec<String>,
    pub students: Vec<SeedStudent>,
    pub teachers: Vec<String>,
    pub subjects: Vec<SeedSubject>,
    pub grades: Vec<SeedGrade>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedStudent {
    pub name: String,
    // groups 向量中的下标
    pub group: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedSubject {
    pub name: String,
    // teachers 向量中的下标
    pub teacher: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedGrade {
    pub score: f64,
    pub date_received: NaiveDate,
    // students 向量中的下标
    pub student: usize,
    // subjects 向量中的下标
    pub subject: usize,
}
