use thiserror::Error;

/// 服务器生命周期错误 (启动、绑定、初始化)
///
/// HTTP 请求层的错误走 [`shared::AppError`]，这里只覆盖启动失败。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("内部服务器错误")]
    Internal(#[from] anyhow::Error),
}

/// 服务器生命周期的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
