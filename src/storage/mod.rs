use std::sync::Arc;

use crate::models::{
    grades::{entities::Grade, requests::CreateGradeRequest},
    groups::{entities::Group, requests::CreateGroupRequest},
    reports::responses::{GroupAverage, StudentAverage, StudentScore},
    seed::{requests::SeedDataset, responses::SeedSummary},
    students::{entities::Student, requests::CreateStudentRequest},
    subjects::{entities::Subject, requests::CreateSubjectRequest},
    teachers::{entities::Teacher, requests::CreateTeacherRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 基础数据管理方法
    // 创建分组
    async fn create_group(&self, group: CreateGroupRequest) -> Result<Group>;
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 创建教师
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    // 创建学科
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    // 录入单条成绩
    async fn create_grade(&self, grade: CreateGradeRequest) -> Result<Grade>;
    // 列出全部分组
    async fn list_groups(&self) -> Result<Vec<Group>>;
    // 列出全部教师
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;
    // 列出全部学科
    async fn list_subjects(&self) -> Result<Vec<Subject>>;
    // 统计学生数量
    async fn count_students(&self) -> Result<u64>;
    // 统计成绩数量
    async fn count_grades(&self) -> Result<u64>;
    // 在单个事务内插入整套种子数据
    async fn insert_seed_dataset(&self, dataset: SeedDataset) -> Result<SeedSummary>;

    /// 统计查询方法
    // 1. 平均分最高的前五名学生
    async fn top_students_by_avg_score(&self) -> Result<Vec<StudentAverage>>;
    // 2. 某学科平均分最高的学生
    async fn top_student_in_subject(&self, subject_name: &str) -> Result<Option<StudentAverage>>;
    // 3. 某学科各分组的平均分
    async fn group_avg_scores_in_subject(&self, subject_name: &str) -> Result<Vec<GroupAverage>>;
    // 4. 全库平均分
    async fn overall_avg_score(&self) -> Result<f64>;
    // 5. 某教师教授的学科
    async fn subjects_taught_by_teacher(&self, teacher_name: &str) -> Result<Vec<String>>;
    // 6. 某分组的学生
    async fn students_in_group(&self, group_name: &str) -> Result<Vec<String>>;
    // 7. 某分组学生在某学科的全部成绩
    async fn group_scores_in_subject(
        &self,
        group_name: &str,
        subject_name: &str,
    ) -> Result<Vec<StudentScore>>;
    // 8. 某教师给出的平均分
    async fn avg_score_given_by_teacher(&self, teacher_name: &str) -> Result<f64>;
    // 9. 某学生修读的学科（去重）
    async fn subjects_attended_by_student(&self, student_name: &str) -> Result<Vec<String>>;
    // 10. 某教师教授给某学生的学科（去重）
    async fn subjects_taught_to_student(
        &self,
        teacher_name: &str,
        student_name: &str,
    ) -> Result<Vec<String>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
