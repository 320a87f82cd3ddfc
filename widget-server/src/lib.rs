//! Widget Server - WhatsApp 聊天小部件后端
//!
//! # 架构概述
//!
//! 本模块是小部件后端的主入口，提供以下核心功能：
//!
//! - **设置管理** (`settings`): 每店铺的小部件配置和联系人列表
//! - **数据库** (`db`): 嵌入式 SQLite 存储
//! - **认证** (`auth`): Shopify 会话令牌验证
//! - **店面渲染** (`widget`): 自包含 HTML/CSS/JS 片段与可用性判断
//! - **HTTP API** (`api`): 管理端与公开嵌入接口
//!
//! # 模块结构
//!
//! ```text
//! widget-server/src/
//! ├── core/          # 配置、状态、错误
//! ├── auth/          # 会话令牌认证
//! ├── services/      # HTTP 服务
//! ├── api/           # HTTP 路由和处理器
//! ├── settings/      # 设置管理服务
//! ├── widget/        # 可用性判断、片段渲染
//! ├── utils/         # 工具函数
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod settings;
pub mod utils;
pub mod widget;

// Re-export 公共类型
pub use auth::{SessionTokenService, ShopContext};
pub use core::{Config, Server, ServerState};
pub use settings::SettingsService;
pub use widget::WidgetRenderer;

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
 _       ___     __           __
| |     / (_)___/ /___ ____  / /_
| | /| / / / __  / __ `/ _ \/ __/
| |/ |/ / / /_/ / /_/ /  __/ /_
|__/|__/_/\__,_/\__, /\___/\__/
               /____/
    "#
    );
}

/// 设置运行环境 (dotenv, 工作目录, 日志)
///
/// 必须在 [`Config::from_env`] 之前调用，否则 `.env` 里的配置不可见、
/// 配置阶段的日志会丢失。
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // .env 必须先加载，Config::from_env 才能读到
    dotenv::dotenv().ok();

    let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".to_string());
    let log_dir = std::path::Path::new(&work_dir).join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

    // 生产环境写滚动日志文件，开发环境只打控制台
    if environment == "production" {
        init_logger_with_file(Some(&log_level), log_dir.to_str());
    } else {
        init_logger_with_file(Some(&log_level), None);
    }

    Ok(())
}
