//! 种子数据使用的名称词库

/// 分组名称词库（分组名有唯一约束，按需抽取不重复的词）
pub const GROUP_NAMES: &[&str] = &[
    "apple", "breeze", "cedar", "dawn", "ember", "frost", "grove", "harbor", "iris", "jade",
    "kite", "lotus", "meadow", "north", "ocean", "pine",
];

/// 学生和教师姓名的名字部分
pub const FIRST_NAMES: &[&str] = &[
    "Alice", "Brian", "Carol", "David", "Emma", "Frank", "Grace", "Henry", "Irene", "Jack",
    "Karen", "Leo", "Maria", "Nathan", "Olivia", "Peter", "Quinn", "Rachel", "Samuel", "Tina",
];

/// 学生和教师姓名的姓氏部分
pub const LAST_NAMES: &[&str] = &[
    "Anderson", "Baker", "Clark", "Davis", "Evans", "Fisher", "Garcia", "Harris", "Johnson",
    "King", "Lewis", "Miller", "Nelson", "Parker", "Roberts", "Smith", "Taylor", "Walker",
    "White", "Young",
];

/// 全部候选学科，种子数据从中抽取子集
pub const SUBJECT_NAMES: &[&str] = &[
    "Math",
    "Physics",
    "Algorithms",
    "Data Structures",
    "MySQL Database",
    "Java Programming",
    "Python Programming",
    "Computer Science",
];
