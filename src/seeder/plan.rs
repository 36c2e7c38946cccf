//! 种子数据集的随机生成

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rand::seq::IndexedRandom;

use super::names::{FIRST_NAMES, GROUP_NAMES, LAST_NAMES, SUBJECT_NAMES};
use crate::config::SeedConfig;
use crate::models::seed::requests::{SeedDataset, SeedGrade, SeedStudent, SeedSubject};

/// 按配置生成一套随机种子数据集（纯内存，不接触数据库）
///
/// 每个学生至少获得一条成绩，分数为 1 到 100 的整数值，
/// 日期落在今年一月一日到今天之间。
pub fn generate_plan(config: &SeedConfig) -> SeedDataset {
    let mut rng = rand::rng();

    let groups = pick_group_names(config.groups as usize, &mut rng);

    let students: Vec<SeedStudent> = (0..config.students)
        .map(|_| SeedStudent {
            name: random_person_name(&mut rng),
            group: if groups.is_empty() {
                None
            } else {
                Some(rng.random_range(0..groups.len()))
            },
        })
        .collect();

    let teachers: Vec<String> = (0..config.teachers)
        .map(|_| random_person_name(&mut rng))
        .collect();

    // 从候选学科里不重复地抽取
    let subject_count = (config.subjects as usize).min(SUBJECT_NAMES.len());
    let subjects: Vec<SeedSubject> = SUBJECT_NAMES
        .choose_multiple(&mut rng, subject_count)
        .map(|name| SeedSubject {
            name: (*name).to_string(),
            teacher: if teachers.is_empty() {
                None
            } else {
                Some(rng.random_range(0..teachers.len()))
            },
        })
        .collect();

    let mut grades = Vec::new();
    if !subjects.is_empty() {
        for student_idx in 0..students.len() {
            let count = rng.random_range(1..=config.max_grades_per_student.max(1));
            for _ in 0..count {
                grades.push(SeedGrade {
                    score: rng.random_range(1..=100) as f64,
                    date_received: random_date_this_year(&mut rng),
                    student: student_idx,
                    subject: rng.random_range(0..subjects.len()),
                });
            }
        }
    }

    SeedDataset {
        groups,
        students,
        teachers,
        subjects,
        grades,
    }
}

fn pick_group_names(count: usize, rng: &mut impl Rng) -> Vec<String> {
    if count <= GROUP_NAMES.len() {
        GROUP_NAMES
            .choose_multiple(rng, count)
            .map(|name| (*name).to_string())
            .collect()
    } else {
        // 超出词库容量时加序号保证分组名唯一
        (0..count)
            .map(|i| {
                let word = GROUP_NAMES[i % GROUP_NAMES.len()];
                if i < GROUP_NAMES.len() {
                    word.to_string()
                } else {
                    format!("{}-{}", word, i / GROUP_NAMES.len() + 1)
                }
            })
            .collect()
    }
}

fn random_person_name(rng: &mut impl Rng) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Alex");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Doe");
    format!("{first} {last}")
}

fn random_date_this_year(rng: &mut impl Rng) -> NaiveDate {
    let today = chrono::Local::now().date_naive();
    let offset = rng.random_range(0..today.ordinal());
    today - chrono::Days::new(offset as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SeedConfig {
        SeedConfig {
            groups: 3,
            students: 30,
            teachers: 5,
            subjects: 6,
            max_grades_per_student: 20,
        }
    }

    #[test]
    fn test_plan_respects_config_counts() {
        let plan = generate_plan(&test_config());

        assert_eq!(plan.groups.len(), 3);
        assert_eq!(plan.students.len(), 30);
        assert_eq!(plan.teachers.len(), 5);
        assert_eq!(plan.subjects.len(), 6);
    }

    #[test]
    fn test_subject_count_capped_at_pool_size() {
        let mut config = test_config();
        config.subjects = 100;

        let plan = generate_plan(&config);
        assert_eq!(plan.subjects.len(), SUBJECT_NAMES.len());
    }

    #[test]
    fn test_plan_indexes_are_in_bounds() {
        let plan = generate_plan(&test_config());

        for student in &plan.students {
            if let Some(idx) = student.group {
                assert!(idx < plan.groups.len());
            }
        }
        for subject in &plan.subjects {
            if let Some(idx) = subject.teacher {
                assert!(idx < plan.teachers.len());
            }
        }
        for grade in &plan.grades {
            assert!(grade.student < plan.students.len());
            assert!(grade.subject < plan.subjects.len());
        }
    }

    #[test]
    fn test_every_student_gets_at_least_one_grade() {
        let plan = generate_plan(&test_config());

        for student_idx in 0..plan.students.len() {
            assert!(
                plan.grades.iter().any(|g| g.student == student_idx),
                "student {student_idx} has no grades"
            );
        }
    }

    #[test]
    fn test_scores_are_integral_percentages() {
        let plan = generate_plan(&test_config());

        for grade in &plan.grades {
            assert!((1.0..=100.0).contains(&grade.score));
            assert_eq!(grade.score.fract(), 0.0);
        }
    }

    #[test]
    fn test_grade_dates_fall_within_current_year() {
        let plan = generate_plan(&test_config());

        let today = chrono::Local::now().date_naive();
        let year_start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap();
        for grade in &plan.grades {
            assert!(grade.date_received >= year_start);
            assert!(grade.date_received <= today);
        }
    }

    #[test]
    fn test_group_and_subject_names_are_distinct() {
        let plan = generate_plan(&test_config());

        let mut groups = plan.groups.clone();
        groups.sort();
        groups.dedup();
        assert_eq!(groups.len(), plan.groups.len());

        let mut subjects: Vec<&str> = plan.subjects.iter().map(|s| s.name.as_str()).collect();
        subjects.sort();
        subjects.dedup();
        assert_eq!(subjects.len(), plan.subjects.len());
        for subject in &plan.subjects {
            assert!(SUBJECT_NAMES.contains(&subject.name.as_str()));
        }
    }

    #[test]
    fn test_many_groups_stay_unique() {
        let mut config = test_config();
        config.groups = 40;

        let plan = generate_plan(&config);
        assert_eq!(plan.groups.len(), 40);

        let mut groups = plan.groups.clone();
        groups.sort();
        groups.dedup();
        assert_eq!(groups.len(), 40);
    }
}
