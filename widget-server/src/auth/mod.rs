//! 认证授权模块
//!
//! 验证嵌入式 Admin 前端携带的 Shopify 会话令牌：
//! - [`SessionTokenService`] - 会话令牌验证服务
//! - [`ShopContext`] - 当前店铺上下文
//! - [`require_session`] - 会话认证中间件

pub mod extractor;
pub mod middleware;
pub mod session;

pub use middleware::require_session;
pub use session::{SessionClaims, SessionConfig, SessionError, SessionTokenService, ShopContext};
