//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`settings`] - 管理端设置接口 (会话令牌认证)
//! - [`embed`] - 店面公开嵌入接口

pub mod embed;
pub mod health;
pub mod settings;
