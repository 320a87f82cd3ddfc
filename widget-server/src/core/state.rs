use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::SessionTokenService;
use crate::core::Config;
use crate::db::DbService;
use crate::services::HttpService;
use crate::settings::SettingsService;

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是小部件后端的核心数据结构，持有所有服务的共享引用。
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | 嵌入式数据库 (SQLite) |
/// | settings | SettingsService | 设置与联系人业务逻辑 |
/// | sessions | Arc<SessionTokenService> | 会话令牌验证服务 |
/// | http | HttpService | HTTP 服务 |
///
/// # 使用示例
///
/// ```ignore
/// // 获取数据库连接池
/// let pool = state.pool();
///
/// // 获取会话验证服务
/// let sessions = state.session_service();
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SQLite)
    pub db: DbService,
    /// 设置管理服务
    pub settings: SettingsService,
    /// 会话令牌验证服务 (Arc 共享所有权)
    pub sessions: Arc<SessionTokenService>,
    /// HTTP 服务
    pub http: HttpService,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`initialize()`](Self::initialize) 方法代替
    pub fn new(
        config: Config,
        db: DbService,
        settings: SettingsService,
        sessions: Arc<SessionTokenService>,
        http: HttpService,
    ) -> Self {
        Self {
            config,
            db,
            settings,
            sessions,
            http,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录 (确保目录存在)
    /// 2. 数据库 (work_dir/widget.db，自动迁移)
    /// 3. 设置管理服务和会话令牌服务
    /// 4. HTTP 服务延迟初始化
    ///
    /// # Panics
    ///
    /// 工作目录或数据库初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        std::fs::create_dir_all(&config.work_dir).expect("Failed to create work directory");

        let db_path = PathBuf::from(&config.work_dir).join("widget.db");
        let db = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");

        let settings = SettingsService::new(db.pool.clone());
        let sessions = Arc::new(SessionTokenService::with_config(config.session.clone()));
        let http = HttpService::new(config.clone());

        let state = Self::new(config.clone(), db, settings, sessions, http.clone());

        // Late initialization for HttpService (needs state)
        http.initialize(state.clone());

        state
    }

    /// 获取数据库连接池
    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    /// 获取工作目录
    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }

    /// 获取会话令牌服务
    pub fn session_service(&self) -> Arc<SessionTokenService> {
        self.sessions.clone()
    }

    /// 获取 HTTP 服务
    pub fn http_service(&self) -> &HttpService {
        &self.http
    }
}
