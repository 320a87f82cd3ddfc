//! HTTP API 端到端测试
//!
//! 手动构造 ServerState (内存数据库)，通过 oneshot 发送请求，
//! 不监听真实端口。覆盖认证、统一表单分发和公开嵌入端点。

use std::sync::Arc;

use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::Value;

use shared::intent::{MSG_CONTACT_CREATED, MSG_CONTACT_DELETED, MSG_SETTINGS_SAVED};
use widget_server::auth::SessionConfig;
use widget_server::core::Config;
use widget_server::db::DbService;
use widget_server::services::HttpService;
use widget_server::{ServerState, SessionTokenService, SettingsService};

const TEST_SECRET: &str = "0123456789abcdef0123456789abcdef01234567";
const SHOP: &str = "alpha.myshopify.com";

async fn test_state() -> ServerState {
    let mut config = Config::from_env();
    config.session = SessionConfig {
        api_key: "test-api-key".to_string(),
        api_secret: TEST_SECRET.to_string(),
        allowed_shop_suffix: ".myshopify.com".to_string(),
        expiration_seconds: 60,
    };

    let db = DbService::new_in_memory().await.expect("in-memory database");
    let settings = SettingsService::new(db.pool.clone());
    let sessions = Arc::new(SessionTokenService::with_config(config.session.clone()));
    let http = HttpService::new(config.clone());

    let state = ServerState::new(config, db, settings, sessions, http.clone());
    http.initialize(state.clone());
    state
}

fn bearer(state: &ServerState, shop: &str) -> String {
    let token = state
        .sessions
        .issue_token(shop, "user-1")
        .expect("issue token");
    format!("Bearer {token}")
}

async fn send(state: &ServerState, request: Request<Body>) -> (StatusCode, Value) {
    let response = state.http.oneshot(request).await.expect("request handled");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn send_text(state: &ServerState, request: Request<Body>) -> (StatusCode, String) {
    let response = state.http.oneshot(request).await.expect("request handled");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

fn get_authed(uri: &str, authorization: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .expect("build request")
}

fn post_form(uri: &str, authorization: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .expect("build request")
}

#[tokio::test]
async fn test_health_is_public() {
    let state = test_state().await;

    let (status, json) = send(&state, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "widget-server");

    let (status, json) = send(&state, get("/api/health/detailed")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn test_admin_routes_require_session() {
    let state = test_state().await;

    let (status, json) = send(&state, get("/api/settings")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "E1001");

    // 坏令牌同样拒绝
    let (status, json) = send(&state, get_authed("/api/settings", "Bearer not-a-jwt")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "E1002");
}

#[tokio::test]
async fn test_get_settings_creates_defaults() {
    let state = test_state().await;
    let auth = bearer(&state, SHOP);

    let (status, json) = send(&state, get_authed("/api/settings", &auth)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], "E0000");
    assert_eq!(json["data"]["shop"], SHOP);
    assert_eq!(json["data"]["is_enabled"], true);
    assert_eq!(json["data"]["button_style"], "edge");
    assert_eq!(json["data"]["position"], "right");
    assert_eq!(json["data"]["color"], "#25D366");
    assert_eq!(json["data"]["plan"], "BASIC");
    assert_eq!(json["data"]["contacts"], Value::Array(vec![]));
}

#[tokio::test]
async fn test_save_settings_action() {
    let state = test_state().await;
    let auth = bearer(&state, SHOP);

    let form = "intent=save_settings&is_enabled=true&button_style=circle&color=%23075E54&position=left";
    let (status, json) = send(&state, post_form("/api/settings/action", &auth, form)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], "E0000");
    assert_eq!(json["message"], MSG_SETTINGS_SAVED);
    assert_eq!(json["data"]["button_style"], "circle");
    assert_eq!(json["data"]["position"], "left");
    assert_eq!(json["data"]["color"], "#075E54");

    // 重新读取确认持久化
    let (_, json) = send(&state, get_authed("/api/settings", &auth)).await;
    assert_eq!(json["data"]["button_style"], "circle");
}

#[tokio::test]
async fn test_contact_lifecycle_over_http() {
    let state = test_state().await;
    let auth = bearer(&state, SHOP);

    // 创建
    let form = "intent=create_contact&name=Support&number=923001234567&subtitle=Sales%20team";
    let (status, json) = send(&state, post_form("/api/settings/action", &auth, form)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], MSG_CONTACT_CREATED);
    assert_eq!(json["data"]["name"], "Support");
    let contact_id = json["data"]["id"].as_i64().expect("contact id");

    // 第三个联系人触发套餐限制
    let form = "intent=create_contact&name=Second&number=923002222222";
    let (status, _) = send(&state, post_form("/api/settings/action", &auth, form)).await;
    assert_eq!(status, StatusCode::OK);

    let form = "intent=create_contact&name=Third&number=923003333333";
    let (status, json) = send(&state, post_form("/api/settings/action", &auth, form)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "E5001");
    assert_eq!(json["message"], "Contact limit reached for Basic plan.");

    // 其他店铺删除不了这个联系人
    let other_auth = bearer(&state, "beta.myshopify.com");
    let form = format!("intent=delete_contact&contact_id={contact_id}");
    let (status, json) = send(
        &state,
        post_form("/api/settings/action", &other_auth, &form),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "E0003");

    // 所有者删除成功，data 显式为 null
    let (status, json) = send(&state, post_form("/api/settings/action", &auth, &form)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], MSG_CONTACT_DELETED);
    assert!(json["data"].is_null());
    assert!(json.get("data").is_some());
}

#[tokio::test]
async fn test_unknown_intent_rejected() {
    let state = test_state().await;
    let auth = bearer(&state, SHOP);

    let (status, json) = send(
        &state,
        post_form("/api/settings/action", &auth, "intent=drop_tables"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "E0005");
    assert_eq!(json["message"], "Invalid intent");
}

#[tokio::test]
async fn test_invalid_style_leaves_settings_untouched() {
    let state = test_state().await;
    let auth = bearer(&state, SHOP);
    send(&state, get_authed("/api/settings", &auth)).await;

    let form = "intent=save_settings&is_enabled=true&button_style=triangle&color=%23000000&position=right";
    let (status, json) = send(&state, post_form("/api/settings/action", &auth, form)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "E0002");

    // 存储的值保持默认
    let (_, json) = send(&state, get_authed("/api/settings", &auth)).await;
    assert_eq!(json["data"]["button_style"], "edge");
    assert_eq!(json["data"]["color"], "#25D366");
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let state = test_state().await;

    // 用同一密钥签发一个已过期的令牌 (默认 60s leeway 也救不回来)
    let expired_issuer = SessionTokenService::with_config(SessionConfig {
        api_key: "test-api-key".to_string(),
        api_secret: TEST_SECRET.to_string(),
        allowed_shop_suffix: ".myshopify.com".to_string(),
        expiration_seconds: -120,
    });
    let token = expired_issuer
        .issue_token(SHOP, "user-1")
        .expect("issue token");

    let (status, json) = send(
        &state,
        get_authed("/api/settings", &format!("Bearer {token}")),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "E1003");
}

#[tokio::test]
async fn test_embed_settings_is_public() {
    let state = test_state().await;

    // 店铺未知: 信封成功、data 显式为 null
    let (status, json) = send(&state, get("/embed/settings?shop=ghost.myshopify.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], "E0000");
    assert!(json["data"].is_null());
    assert!(json.get("data").is_some());

    // 缺少 shop 参数
    let (status, json) = send(&state, get("/embed/settings")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "E0004");
    assert_eq!(json["message"], "Shop parameter missing");

    // 已知店铺返回完整记录，无需认证
    state.settings.get_or_create(SHOP).await.unwrap();
    let (status, json) = send(&state, get(&format!("/embed/settings?shop={SHOP}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["shop"], SHOP);
}

#[tokio::test]
async fn test_embed_widget_html() {
    let state = test_state().await;

    // 未知店铺: 204 空响应
    let (status, body) = send_text(&state, get("/embed/widget?shop=ghost.myshopify.com")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    // 种入一个全天在线的联系人
    state.settings.get_or_create(SHOP).await.unwrap();
    state
        .settings
        .add_contact(
            SHOP,
            shared::models::ContactCreate {
                name: "Support".to_string(),
                subtitle: None,
                number: "+92 300-1234567".to_string(),
                display_time: Some("24/7".to_string()),
                start_time: Some("00:00".to_string()),
                end_time: Some("23:59".to_string()),
            },
        )
        .await
        .unwrap();

    let (status, body) = send_text(&state, get(&format!("/embed/widget?shop={SHOP}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("wa-widget-button"));
    assert!(body.contains("wa-widget-popup"));
    // wa.me 链接只保留数字
    assert!(body.contains("https://wa.me/923001234567"));
    // 全天窗口内圆点是在线色
    assert!(body.contains("#25D366"));
    assert!(body.contains("setInterval"));

    // 关闭开关后不再渲染
    state
        .settings
        .update_appearance(
            SHOP,
            shared::models::WidgetSettingsUpdate {
                is_enabled: false,
                button_style: shared::models::ButtonStyle::Edge,
                color: "#25D366".to_string(),
                position: shared::models::WidgetPosition::Right,
            },
        )
        .await
        .unwrap();
    let (status, body) = send_text(&state, get(&format!("/embed/widget?shop={SHOP}"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_session_shop_isolation() {
    let state = test_state().await;

    // 两个店铺各自拿到自己的设置
    let auth_a = bearer(&state, "a.myshopify.com");
    let auth_b = bearer(&state, "b.myshopify.com");

    let (_, json_a) = send(&state, get_authed("/api/settings", &auth_a)).await;
    let (_, json_b) = send(&state, get_authed("/api/settings", &auth_b)).await;
    assert_eq!(json_a["data"]["shop"], "a.myshopify.com");
    assert_eq!(json_b["data"]["shop"], "b.myshopify.com");
    assert_ne!(json_a["data"]["id"], json_b["data"]["id"]);
}
