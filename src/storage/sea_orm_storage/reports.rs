//! 统计查询存储操作
//!
//! 目录中的十个只读查询，全部以名称字符串作为过滤条件，
//! 找不到对应实体时返回空结果或默认值，不报错。

use super::SeaOrmStorage;
use crate::entity::grades::{Column as GradeColumn, Entity as Grades, Relation as GradeRelation};
use crate::entity::groups::{Column as GroupColumn, Entity as Groups, Relation as GroupRelation};
use crate::entity::students::{
    Column as StudentColumn, Entity as Students, Relation as StudentRelation,
};
use crate::entity::subjects::{
    Column as SubjectColumn, Entity as Subjects, Relation as SubjectRelation,
};
use crate::entity::teachers::{
    Column as TeacherColumn, Entity as Teachers, Relation as TeacherRelation,
};
use crate::errors::{GradebookError, Result};
use crate::models::reports::responses::{GroupAverage, StudentAverage, StudentScore};
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

/// AVG(grades.score) 聚合表达式
fn avg_score() -> SimpleExpr {
    Func::avg(Expr::col((Grades, GradeColumn::Score))).into()
}

impl SeaOrmStorage {
    /// 1. 平均分最高的前五名学生
    pub async fn top_students_by_avg_score_impl(&self) -> Result<Vec<StudentAverage>> {
        let rows: Vec<(String, f64)> = Students::find()
            .select_only()
            .column(StudentColumn::Name)
            .column_as(avg_score(), "avg_score")
            .join(JoinType::InnerJoin, StudentRelation::Grades.def())
            .group_by(StudentColumn::Id)
            .group_by(StudentColumn::Name)
            .order_by_desc(avg_score())
            .limit(5)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("查询学生排名失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(student_name, avg_score)| StudentAverage {
                student_name,
                avg_score,
            })
            .collect())
    }

    /// 2. 某学科平均分最高的学生
    pub async fn top_student_in_subject_impl(
        &self,
        subject_name: &str,
    ) -> Result<Option<StudentAverage>> {
        let row: Option<(String, f64)> = Students::find()
            .select_only()
            .column(StudentColumn::Name)
            .column_as(avg_score(), "avg_score")
            .join(JoinType::InnerJoin, StudentRelation::Grades.def())
            .join(JoinType::InnerJoin, GradeRelation::Subject.def())
            .filter(SubjectColumn::Name.eq(subject_name))
            .group_by(StudentColumn::Id)
            .group_by(StudentColumn::Name)
            .order_by_desc(avg_score())
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(|e| {
                GradebookError::database_operation(format!("查询学科第一名失败: {e}"))
            })?;

        Ok(row.map(|(student_name, avg_score)| StudentAverage {
            student_name,
            avg_score,
        }))
    }

    /// 3. 某学科各分组的平均分（按平均分降序）
    pub async fn group_avg_scores_in_subject_impl(
        &self,
        subject_name: &str,
    ) -> Result<Vec<GroupAverage>> {
        let rows: Vec<(String, f64)> = Groups::find()
            .select_only()
            .column(GroupColumn::Name)
            .column_as(avg_score(), "avg_score")
            .join(JoinType::InnerJoin, GroupRelation::Students.def())
            .join(JoinType::InnerJoin, StudentRelation::Grades.def())
            .join(JoinType::InnerJoin, GradeRelation::Subject.def())
            .filter(SubjectColumn::Name.eq(subject_name))
            .group_by(GroupColumn::Name)
            .order_by_desc(avg_score())
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                GradebookError::database_operation(format!("查询分组平均分失败: {e}"))
            })?;

        Ok(rows
            .into_iter()
            .map(|(group_name, avg_score)| GroupAverage {
                group_name,
                avg_score,
            })
            .collect())
    }

    /// 4. 全库平均分（无成绩时为 0）
    pub async fn overall_avg_score_impl(&self) -> Result<f64> {
        let avg = Grades::find()
            .select_only()
            .column_as(avg_score(), "avg_score")
            .into_tuple::<Option<f64>>()
            .one(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("查询全库平均分失败: {e}")))?
            .flatten();

        Ok(avg.unwrap_or(0.0))
    }

    /// 5. 某教师教授的学科
    pub async fn subjects_taught_by_teacher_impl(&self, teacher_name: &str) -> Result<Vec<String>> {
        Subjects::find()
            .select_only()
            .column(SubjectColumn::Name)
            .join(JoinType::InnerJoin, SubjectRelation::Teacher.def())
            .filter(TeacherColumn::Name.eq(teacher_name))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("查询教师学科失败: {e}")))
    }

    /// 6. 某分组的学生
    pub async fn students_in_group_impl(&self, group_name: &str) -> Result<Vec<String>> {
        Students::find()
            .select_only()
            .column(StudentColumn::Name)
            .join(JoinType::InnerJoin, StudentRelation::Group.def())
            .filter(GroupColumn::Name.eq(group_name))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("查询分组学生失败: {e}")))
    }

    /// 7. 某分组学生在某学科的全部成绩（每条成绩一行，不聚合）
    pub async fn group_scores_in_subject_impl(
        &self,
        group_name: &str,
        subject_name: &str,
    ) -> Result<Vec<StudentScore>> {
        let rows: Vec<(String, f64)> = Students::find()
            .select_only()
            .column(StudentColumn::Name)
            .column(GradeColumn::Score)
            .join(JoinType::InnerJoin, StudentRelation::Group.def())
            .join(JoinType::InnerJoin, StudentRelation::Grades.def())
            .join(JoinType::InnerJoin, GradeRelation::Subject.def())
            .filter(GroupColumn::Name.eq(group_name))
            .filter(SubjectColumn::Name.eq(subject_name))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                GradebookError::database_operation(format!("查询分组成绩明细失败: {e}"))
            })?;

        Ok(rows
            .into_iter()
            .map(|(student_name, score)| StudentScore {
                student_name,
                score,
            })
            .collect())
    }

    /// 8. 某教师给出的平均分（无成绩时为 0）
    pub async fn avg_score_given_by_teacher_impl(&self, teacher_name: &str) -> Result<f64> {
        let avg = Teachers::find()
            .select_only()
            .column_as(avg_score(), "avg_score")
            .join(JoinType::InnerJoin, TeacherRelation::Subjects.def())
            .join(JoinType::InnerJoin, SubjectRelation::Grades.def())
            .filter(TeacherColumn::Name.eq(teacher_name))
            .into_tuple::<Option<f64>>()
            .one(&self.db)
            .await
            .map_err(|e| {
                GradebookError::database_operation(format!("查询教师平均分失败: {e}"))
            })?
            .flatten();

        Ok(avg.unwrap_or(0.0))
    }

    /// 9. 某学生修读的学科（去重）
    pub async fn subjects_attended_by_student_impl(
        &self,
        student_name: &str,
    ) -> Result<Vec<String>> {
        Students::find()
            .select_only()
            .column(SubjectColumn::Name)
            .join(JoinType::InnerJoin, StudentRelation::Grades.def())
            .join(JoinType::InnerJoin, GradeRelation::Subject.def())
            .filter(StudentColumn::Name.eq(student_name))
            .distinct()
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| GradebookError::database_operation(format!("查询学生学科失败: {e}")))
    }

    /// 10. 某教师教授给某学生的学科（去重）
    pub async fn subjects_taught_to_student_impl(
        &self,
        teacher_name: &str,
        student_name: &str,
    ) -> Result<Vec<String>> {
        Students::find()
            .select_only()
            .column(SubjectColumn::Name)
            .join(JoinType::InnerJoin, StudentRelation::Grades.def())
            .join(JoinType::InnerJoin, GradeRelation::Subject.def())
            .join(JoinType::InnerJoin, SubjectRelation::Teacher.def())
            .filter(StudentColumn::Name.eq(student_name))
            .filter(TeacherColumn::Name.eq(teacher_name))
            .distinct()
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                GradebookError::database_operation(format!("查询师生学科交集失败: {e}"))
            })
    }
}
