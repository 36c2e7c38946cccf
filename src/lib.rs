//! Gradebook - 学生成绩统计演示程序
//!
//! 基于 SeaORM 构建的小型学生数据库，内置十个统计查询。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 运行时生命周期管理
//! - `seeder`: 随机种子数据生成
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod seeder;
pub mod services;
pub mod storage;
