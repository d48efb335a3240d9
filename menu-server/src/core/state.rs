use std::path::Path;
use std::time::{Duration, Instant};

use axum::Router;
use sqlx::SqlitePool;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 克隆成本极低 (连接池内部为 Arc)，每个处理器持有一份。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | SQLite 连接池 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库服务
    pub db: DbService,
    started_at: Instant,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, db: DbService) -> Self {
        Self {
            config,
            db,
            started_at: Instant::now(),
        }
    }

    /// 打开数据库并应用迁移
    pub async fn initialize(config: &Config) -> Result<Self> {
        if let Some(parent) = Path::new(&config.database_path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                ServerError::Config(format!("Cannot create {}: {e}", parent.display()))
            })?;
        }

        let db = DbService::new(&config.database_path).await?;
        Ok(Self::new(config.clone(), db))
    }

    /// 内存数据库状态，用于测试和演示
    pub async fn in_memory() -> Result<Self> {
        let db = DbService::in_memory().await?;
        Ok(Self::new(Config::default(), db))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// 完整路由 (含中间件)，可直接用于 `oneshot` 调用
    pub fn router(&self) -> Router {
        crate::api::router(self.clone())
    }
}
