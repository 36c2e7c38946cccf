pub mod showcase;

use std::sync::Arc;

use crate::errors::Result;
use crate::storage::Storage;

/// 统计报表服务，持有注入的存储句柄
pub struct ReportService {
    storage: Arc<dyn Storage>,
}

impl ReportService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> Arc<dyn Storage> {
        self.storage.clone()
    }

    /// 依次执行目录中的十个查询并打印编号结果
    pub async fn run_showcase(&self) -> Result<()> {
        showcase::run_showcase(self).await
    }
}
