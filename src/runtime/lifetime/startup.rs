use crate::config::AppConfig;
use crate::seeder;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 初始化种子数据
/// 如果数据库中没有任何学生，则生成并插入一套随机数据集
async fn seed_if_empty(storage: &Arc<dyn Storage>) {
    // 检查是否已有数据
    match storage.count_students().await {
        Ok(count) if count > 0 => {
            debug!("Database already has {} student(s), skipping seed", count);
            return;
        }
        Ok(_) => {
            info!("No students found in database, seeding random dataset...");
        }
        Err(e) => {
            warn!("Failed to count students: {}, skipping seed", e);
            return;
        }
    }

    let config = AppConfig::get();
    if let Err(e) = seeder::seed_database(storage, &config.seed).await {
        warn!("Failed to seed database: {}", e);
    }
}

/// 准备程序启动的上下文
/// 包括存储初始化和首次种子数据
pub async fn prepare_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化种子数据（如果需要）
    seed_if_empty(&storage).await;

    StartupContext { storage }
}
