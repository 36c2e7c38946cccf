use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub seed: SeedConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,    // 数据库连接 URL（从 scheme 自动推断类型）
    pub pool_size: u32, // 连接池大小
    pub timeout: u64,   // 连接超时 (秒)
}

/// 数据填充配置
///
/// 控制空库启动时生成的合成数据规模。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub groups: u32,                 // 分组数量
    pub students: u32,               // 学生数量
    pub teachers: u32,               // 教师数量
    pub subjects: u32,               // 学科数量（从固定学科池中抽取）
    pub max_grades_per_student: u32, // 每个学生最多的成绩条数
}
