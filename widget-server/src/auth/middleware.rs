//! 认证中间件
//!
//! 为 Shopify 会话令牌认证提供 Axum 中间件

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{SessionTokenService, ShopContext};
use crate::core::ServerState;
use crate::security_log;
use shared::AppError;

/// 认证中间件 - 要求有效的会话令牌
///
/// 从 `Authorization: Bearer <token>` 头提取并验证会话令牌。
/// 验证成功后将 [`ShopContext`] 注入请求扩展 (`req.extensions_mut().insert(ctx)`)。
///
/// # 跳过认证的路径
///
/// - `OPTIONS *` (CORS 预检)
/// - 非 `/api/` 路径 (公开的 `/embed/*` 端点)
/// - `/api/health*` (健康检查)
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无 Authorization 头 | 401 Unauthorized |
/// | 令牌过期 | 401 TokenExpired |
/// | 无效令牌 | 401 InvalidToken |
/// | 店铺域名不合法 | 403 InvalidShopDomain |
pub async fn require_session(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // 允许 CORS 预检的 OPTIONS 请求 (跳过认证)
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // 非 API 路由跳过认证 (店面嵌入端点是公开的)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    // 健康检查跳过认证
    if path.starts_with("/api/health") {
        return Ok(next.run(req).await);
    }

    let sessions = state.session_service();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => SessionTokenService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "session_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::not_authenticated());
        }
    };

    // 验证令牌
    match sessions.validate_token(token) {
        Ok(claims) => {
            let ctx = ShopContext::from(claims);
            req.extensions_mut().insert(ctx);
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "session_rejected",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );

            Err(AppError::from(e))
        }
    }
}
