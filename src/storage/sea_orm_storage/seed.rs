//! 种子数据存储操作

use super::SeaOrmStorage;
use crate::entity::prelude::{
    GradeActiveModel, GroupActiveModel, StudentActiveModel, SubjectActiveModel, TeacherActiveModel,
};
use crate::errors::{GradebookError, Result};
use crate::models::seed::{requests::SeedDataset, responses::SeedSummary};
use sea_orm::{ActiveModelTrait, Set, TransactionTrait};

impl SeaOrmStorage {
    /// 在单个事务内插入整套种子数据
    ///
    /// 数据集内部的下标引用在插入过程中解析为真实的数据库ID。
    /// 任何一步失败（包括悬空下标）都会回滚整个数据集。
    pub async fn insert_seed_dataset_impl(&self, dataset: SeedDataset) -> Result<SeedSummary> {
        let summary = SeedSummary {
            groups: dataset.groups.len() as u64,
            students: dataset.students.len() as u64,
            teachers: dataset.teachers.len() as u64,
            subjects: dataset.subjects.len() as u64,
            grades: dataset.grades.len() as u64,
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GradebookError::database_operation(format!("开启种子事务失败: {e}")))?;

        // 按依赖顺序插入：分组 -> 学生 -> 教师 -> 学科 -> 成绩
        let mut group_ids = Vec::with_capacity(dataset.groups.len());
        for name in dataset.groups {
            let row = GroupActiveModel {
                name: Set(name),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| GradebookError::database_operation(format!("插入分组失败: {e}")))?;
            group_ids.push(row.id);
        }

        let mut student_ids = Vec::with_capacity(dataset.students.len());
        for student in dataset.students {
            let group_id = match student.group {
                Some(idx) => Some(*group_ids.get(idx).ok_or_else(|| {
                    GradebookError::seeding(format!(
                        "学生 {} 引用了不存在的分组下标 {idx}",
                        student.name
                    ))
                })?),
                None => None,
            };
            let row = StudentActiveModel {
                name: Set(student.name),
                group_id: Set(group_id),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| GradebookError::database_operation(format!("插入学生失败: {e}")))?;
            student_ids.push(row.id);
        }

        let mut teacher_ids = Vec::with_capacity(dataset.teachers.len());
        for name in dataset.teachers {
            let row = TeacherActiveModel {
                name: Set(name),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| GradebookError::database_operation(format!("插入教师失败: {e}")))?;
            teacher_ids.push(row.id);
        }

        let mut subject_ids = Vec::with_capacity(dataset.subjects.len());
        for subject in dataset.subjects {
            let teacher_id = match subject.teacher {
                Some(idx) => Some(*teacher_ids.get(idx).ok_or_else(|| {
                    GradebookError::seeding(format!(
                        "学科 {} 引用了不存在的教师下标 {idx}",
                        subject.name
                    ))
                })?),
                None => None,
            };
            let row = SubjectActiveModel {
                name: Set(subject.name),
                teacher_id: Set(teacher_id),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| GradebookError::database_operation(format!("插入学科失败: {e}")))?;
            subject_ids.push(row.id);
        }

        for grade in dataset.grades {
            let student_id = *student_ids.get(grade.student).ok_or_else(|| {
                GradebookError::seeding(format!("成绩引用了不存在的学生下标 {}", grade.student))
            })?;
            let subject_id = *subject_ids.get(grade.subject).ok_or_else(|| {
                GradebookError::seeding(format!("成绩引用了不存在的学科下标 {}", grade.subject))
            })?;
            GradeActiveModel {
                score: Set(grade.score),
                date_received: Set(grade.date_received),
                student_id: Set(student_id),
                subject_id: Set(subject_id),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| GradebookError::database_operation(format!("插入成绩失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| GradebookError::database_operation(format!("提交种子事务失败: {e}")))?;

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::seed::requests::{SeedDataset, SeedGrade, SeedStudent, SeedSubject};
    use crate::storage::sea_orm_storage::test_support::storage_with_tempdir;

    fn sample_date() -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[tokio::test]
    async fn test_insert_seed_dataset() {
        let (storage, _dir) = storage_with_tempdir().await;

        let dataset = SeedDataset {
            groups: vec!["A".into(), "B".into()],
            students: vec![
                SeedStudent {
                    name: "Alice White".into(),
                    group: Some(0),
                },
                SeedStudent {
                    name: "Bob Green".into(),
                    group: Some(1),
                },
                SeedStudent {
                    name: "Carol Black".into(),
                    group: None,
                },
            ],
            teachers: vec!["Dan Brown".into()],
            subjects: vec![SeedSubject {
                name: "Math".into(),
                teacher: Some(0),
            }],
            grades: vec![
                SeedGrade {
                    score: 90.0,
                    date_received: sample_date(),
                    student: 0,
                    subject: 0,
                },
                SeedGrade {
                    score: 70.0,
                    date_received: sample_date(),
                    student: 1,
                    subject: 0,
                },
            ],
        };

        let summary = storage.insert_seed_dataset_impl(dataset).await.unwrap();
        assert_eq!(summary.groups, 2);
        assert_eq!(summary.students, 3);
        assert_eq!(summary.teachers, 1);
        assert_eq!(summary.subjects, 1);
        assert_eq!(summary.grades, 2);

        assert_eq!(storage.count_students_impl().await.unwrap(), 3);
        assert_eq!(storage.count_grades_impl().await.unwrap(), 2);
        assert_eq!(storage.list_groups_impl().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_dangling_index_rolls_back_everything() {
        let (storage, _dir) = storage_with_tempdir().await;

        let dataset = SeedDataset {
            groups: vec!["A".into()],
            students: vec![SeedStudent {
                name: "Alice White".into(),
                group: Some(0),
            }],
            teachers: vec![],
            subjects: vec![SeedSubject {
                name: "Math".into(),
                teacher: None,
            }],
            grades: vec![SeedGrade {
                score: 50.0,
                date_received: sample_date(),
                // 学生下标 5 不存在
                student: 5,
                subject: 0,
            }],
        };

        let err = storage.insert_seed_dataset_impl(dataset).await.unwrap_err();
        assert_eq!(err.code(), "E004");

        // 事务回滚后库里不应留下任何数据
        assert_eq!(storage.count_students_impl().await.unwrap(), 0);
        assert_eq!(storage.count_grades_impl().await.unwrap(), 0);
        assert!(storage.list_groups_impl().await.unwrap().is_empty());
    }
}
