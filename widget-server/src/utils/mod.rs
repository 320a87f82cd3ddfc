//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`error`] - 成功响应辅助函数 (错误类型本体在 shared::error)
//! - [`logger`] - 日志初始化
//! - [`time`] - 业务时区工具
//! - [`validation`] - 输入校验

pub mod error;
pub mod logger;
pub mod time;
pub mod validation;

pub use error::{ok, ok_with_message};
