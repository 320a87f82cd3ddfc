//! 核心模块 - 服务器配置、状态和生命周期
//!
//! # 内容
//!
//! - [`Config`] - 环境变量驱动的服务器配置
//! - [`ServerState`] - 共享应用状态 (数据库、会话验证、HTTP 服务)
//! - [`Server`] - 服务器生命周期管理

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
