//! Shopify 会话令牌服务
//!
//! 嵌入式 Admin 前端每个请求携带一个短期 JWT (HS256，App Bridge 签发)。
//! 本模块用应用的 API secret 验证签名和标准声明，并从 `dest` 解析店铺域名。

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 会话令牌配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Shopify 应用 API key (令牌的 `aud` 声明)
    pub api_key: String,
    /// Shopify 应用 API secret (HS256 签名密钥，应至少 32 字节)
    pub api_secret: String,
    /// 允许的店铺域名后缀
    pub allowed_shop_suffix: String,
    /// 自签令牌的有效期 (秒，测试和开发用)
    pub expiration_seconds: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let api_secret = match load_api_secret() {
            Ok(secret) => secret,
            Err(e) => {
                #[cfg(debug_assertions)]
                {
                    tracing::warn!("Session configuration error: {}, using generated key", e);
                    generate_dev_secret()
                }
                #[cfg(not(debug_assertions))]
                {
                    panic!("FATAL: SHOPIFY_API_SECRET configuration failed: {}", e);
                }
            }
        };

        Self {
            api_key: std::env::var("SHOPIFY_API_KEY")
                .unwrap_or_else(|_| "widget-dev-key".to_string()),
            api_secret,
            allowed_shop_suffix: std::env::var("ALLOWED_SHOP_SUFFIX")
                .unwrap_or_else(|_| ".myshopify.com".to_string()),
            expiration_seconds: std::env::var("SESSION_EXPIRATION_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60), // Shopify 会话令牌有效期 1 分钟
        }
    }
}

/// 会话令牌中的 JWT Claims (Shopify 格式)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// 签发者: `https://{shop}/admin`
    pub iss: String,
    /// 目标店铺: `https://{shop}`
    pub dest: String,
    /// 受众 (应用 API key)
    pub aud: String,
    /// 用户 ID (Subject)
    pub sub: String,
    /// 过期时间戳
    pub exp: i64,
    /// 生效时间戳
    pub nbf: i64,
    /// 签发时间戳
    pub iat: i64,
    /// 令牌唯一标识
    pub jti: String,
    /// 会话 ID (可选)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
}

/// 会话令牌错误
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("无效令牌: {0}")]
    InvalidToken(String),

    #[error("令牌已过期")]
    ExpiredToken,

    #[error("无效签名")]
    InvalidSignature,

    #[error("受众不匹配")]
    InvalidAudience,

    #[error("店铺域名不合法: {0}")]
    InvalidShopDomain(String),

    #[error("令牌生成失败: {0}")]
    GenerationFailed(String),

    #[error("配置错误: {0}")]
    ConfigError(String),
}

impl From<SessionError> for shared::AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::ExpiredToken => shared::AppError::token_expired(),
            SessionError::InvalidShopDomain(domain) => shared::AppError::invalid_shop_domain(
                format!("Shop domain is not allowed: {domain}"),
            ),
            _ => shared::AppError::invalid_token("Invalid session token"),
        }
    }
}

/// 生成可打印的临时密钥 (用于开发环境)
pub fn generate_dev_secret() -> String {
    const ALLOWED: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    (0..48)
        .map(|_| ALLOWED[rng.gen_range(0..ALLOWED.len())] as char)
        .collect()
}

/// 从环境变量安全地加载 API secret
fn load_api_secret() -> Result<String, SessionError> {
    match std::env::var("SHOPIFY_API_SECRET") {
        Ok(secret) => {
            if secret.len() < 32 {
                return Err(SessionError::ConfigError(
                    "SHOPIFY_API_SECRET must be at least 32 characters long".to_string(),
                ));
            }
            Ok(secret)
        }
        Err(_) => {
            #[cfg(debug_assertions)]
            {
                tracing::warn!(
                    "SHOPIFY_API_SECRET not set! Generating temporary key for development."
                );
                Ok(generate_dev_secret())
            }
            #[cfg(not(debug_assertions))]
            {
                Err(SessionError::ConfigError(
                    "SHOPIFY_API_SECRET environment variable must be set in production!"
                        .to_string(),
                ))
            }
        }
    }
}

/// 从 URL 中提取主机名
///
/// `https://shop.myshopify.com/admin` → `shop.myshopify.com`
pub fn host_of(url: &str) -> &str {
    let rest = url.strip_prefix("https://").unwrap_or(url);
    rest.split('/').next().unwrap_or(rest)
}

/// 会话令牌验证服务
#[derive(Debug, Clone)]
pub struct SessionTokenService {
    pub config: SessionConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SessionTokenService {
    /// 使用默认配置创建服务
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// 使用指定配置创建服务
    pub fn with_config(config: SessionConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.api_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.api_secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// 为店铺签发令牌 (测试和本地开发用；生产令牌由 App Bridge 签发)
    pub fn issue_token(&self, shop: &str, user_id: &str) -> Result<String, SessionError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.expiration_seconds);

        let claims = SessionClaims {
            iss: format!("https://{shop}/admin"),
            dest: format!("https://{shop}"),
            aud: self.config.api_key.clone(),
            sub: user_id.to_string(),
            exp: expiration.timestamp(),
            nbf: now.timestamp(),
            iat: now.timestamp(),
            jti: format!("{:032x}", rand::thread_rng().r#gen::<u128>()),
            sid: None,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| SessionError::GenerationFailed(e.to_string()))
    }

    /// 验证并解码令牌
    ///
    /// 1. HS256 签名 + `exp` / `nbf` / `aud` 标准声明
    /// 2. `dest` 主机必须以允许的店铺后缀结尾
    /// 3. `iss` 主机必须与 `dest` 主机一致
    pub fn validate_token(&self, token: &str) -> Result<SessionClaims, SessionError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.api_key]);
        validation.set_required_spec_claims(&["exp", "nbf", "aud"]);
        validation.validate_nbf = true;

        let token_data =
            decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => SessionError::ExpiredToken,
                    ErrorKind::InvalidSignature => SessionError::InvalidSignature,
                    ErrorKind::InvalidAudience => SessionError::InvalidAudience,
                    ErrorKind::InvalidToken => SessionError::InvalidToken(e.to_string()),
                    _ => SessionError::InvalidToken(format!("Token validation failed: {}", e)),
                }
            })?;

        let claims = token_data.claims;

        let shop = host_of(&claims.dest);
        if shop.is_empty() || !shop.ends_with(&self.config.allowed_shop_suffix) {
            return Err(SessionError::InvalidShopDomain(claims.dest.clone()));
        }
        if host_of(&claims.iss) != shop {
            return Err(SessionError::InvalidToken(format!(
                "iss host does not match dest host: {}",
                claims.iss
            )));
        }

        Ok(claims)
    }

    /// 从 Authorization 头提取令牌
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

impl Default for SessionTokenService {
    fn default() -> Self {
        Self::new()
    }
}

/// 当前店铺上下文 (从会话令牌解析)
///
/// 由认证中间件创建，注入到请求处理函数
///
/// # 示例
///
/// ```ignore
/// async fn handler(ctx: ShopContext) -> Json<()> {
///     println!("店铺: {}", ctx.shop);
///     Json(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ShopContext {
    /// 店铺域名 (`shop.myshopify.com`)
    pub shop: String,
    /// 用户 ID
    pub user_id: String,
    /// 会话 ID (可选)
    pub session_id: Option<String>,
}

impl From<SessionClaims> for ShopContext {
    fn from(claims: SessionClaims) -> Self {
        Self {
            shop: host_of(&claims.dest).to_string(),
            user_id: claims.sub,
            session_id: claims.sid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SessionConfig {
        SessionConfig {
            api_key: "test-api-key".to_string(),
            api_secret: "test-secret-test-secret-test-secret-0000".to_string(),
            allowed_shop_suffix: ".myshopify.com".to_string(),
            expiration_seconds: 60,
        }
    }

    #[test]
    fn test_issue_and_validate() {
        let service = SessionTokenService::with_config(test_config());

        let token = service
            .issue_token("demo.myshopify.com", "user-1")
            .expect("Failed to issue test token");
        let claims = service
            .validate_token(&token)
            .expect("Failed to validate test token");

        assert_eq!(claims.dest, "https://demo.myshopify.com");
        assert_eq!(claims.sub, "user-1");

        let ctx = ShopContext::from(claims);
        assert_eq!(ctx.shop, "demo.myshopify.com");
        assert_eq!(ctx.user_id, "user-1");
    }

    #[test]
    fn test_rejects_wrong_audience() {
        let issuer = SessionTokenService::with_config(SessionConfig {
            api_key: "other-app".to_string(),
            ..test_config()
        });
        let verifier = SessionTokenService::with_config(test_config());

        let token = issuer
            .issue_token("demo.myshopify.com", "user-1")
            .expect("Failed to issue test token");

        assert!(matches!(
            verifier.validate_token(&token),
            Err(SessionError::InvalidAudience)
        ));
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let issuer = SessionTokenService::with_config(SessionConfig {
            api_secret: "another-secret-another-secret-another-00".to_string(),
            ..test_config()
        });
        let verifier = SessionTokenService::with_config(test_config());

        let token = issuer
            .issue_token("demo.myshopify.com", "user-1")
            .expect("Failed to issue test token");

        assert!(matches!(
            verifier.validate_token(&token),
            Err(SessionError::InvalidSignature)
        ));
    }

    #[test]
    fn test_rejects_expired_token() {
        let service = SessionTokenService::with_config(SessionConfig {
            expiration_seconds: -120,
            ..test_config()
        });

        let token = service
            .issue_token("demo.myshopify.com", "user-1")
            .expect("Failed to issue test token");

        assert!(matches!(
            service.validate_token(&token),
            Err(SessionError::ExpiredToken)
        ));
    }

    #[test]
    fn test_rejects_foreign_shop_domain() {
        let service = SessionTokenService::with_config(test_config());

        let token = service
            .issue_token("evil.example.com", "user-1")
            .expect("Failed to issue test token");

        assert!(matches!(
            service.validate_token(&token),
            Err(SessionError::InvalidShopDomain(_))
        ));
    }

    #[test]
    fn test_host_of() {
        assert_eq!(
            host_of("https://demo.myshopify.com/admin"),
            "demo.myshopify.com"
        );
        assert_eq!(host_of("https://demo.myshopify.com"), "demo.myshopify.com");
        assert_eq!(host_of("demo.myshopify.com"), "demo.myshopify.com");
    }
}
