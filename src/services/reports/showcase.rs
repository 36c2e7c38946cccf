use tracing::debug;

use super::ReportService;
use crate::errors::Result;

/// 执行全部十个目录查询并把结果按编号打印为 JSON 行
///
/// 演示参数取自当前数据集：第一个学科/教师/分组，
/// 以及查询 1 里平均分最高的学生。空数据集打印空结果，不报错。
pub async fn run_showcase(service: &ReportService) -> Result<()> {
    let storage = service.storage();

    let subject_name = storage
        .list_subjects()
        .await?
        .first()
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "Math".to_string());
    let teacher_name = storage
        .list_teachers()
        .await?
        .first()
        .map(|t| t.name.clone())
        .unwrap_or_default();
    let group_name = storage
        .list_groups()
        .await?
        .first()
        .map(|g| g.name.clone())
        .unwrap_or_default();

    let top_students = storage.top_students_by_avg_score().await?;
    let student_name = top_students
        .first()
        .map(|s| s.student_name.clone())
        .unwrap_or_default();

    debug!(
        "Showcase parameters: subject={}, teacher={}, group={}, student={}",
        subject_name, teacher_name, group_name, student_name
    );

    println!(
        "1. Top 5 students by average score: {}",
        serde_json::to_string(&top_students)?
    );
    println!(
        "2. Top student in {}: {}",
        subject_name,
        serde_json::to_string(&storage.top_student_in_subject(&subject_name).await?)?
    );
    println!(
        "3. Average scores by group for {}: {}",
        subject_name,
        serde_json::to_string(&storage.group_avg_scores_in_subject(&subject_name).await?)?
    );
    println!(
        "4. Overall average score: {}",
        storage.overall_avg_score().await?
    );
    println!(
        "5. Subjects taught by first teacher: {}",
        serde_json::to_string(&storage.subjects_taught_by_teacher(&teacher_name).await?)?
    );
    println!(
        "6. Students in first group: {}",
        serde_json::to_string(&storage.students_in_group(&group_name).await?)?
    );
    println!(
        "7. Scores in first group for {}: {}",
        subject_name,
        serde_json::to_string(
            &storage
                .group_scores_in_subject(&group_name, &subject_name)
                .await?
        )?
    );
    println!(
        "8. Average score given by first teacher: {}",
        storage.avg_score_given_by_teacher(&teacher_name).await?
    );
    println!(
        "9. Subjects attended by top student: {}",
        serde_json::to_string(&storage.subjects_attended_by_student(&student_name).await?)?
    );
    println!(
        "10. Subjects taught by first teacher to top student: {}",
        serde_json::to_string(
            &storage
                .subjects_taught_to_student(&teacher_name, &student_name)
                .await?
        )?
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::services::ReportService;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::test_support::storage_with_tempdir;

    #[tokio::test]
    async fn test_showcase_runs_on_empty_database() {
        let (storage, _dir) = storage_with_tempdir().await;
        let storage: Arc<dyn Storage> = Arc::new(storage);

        let service = ReportService::new(storage);
        service.run_showcase().await.unwrap();
    }
}
