//! 设置管理模块 - 店铺小部件配置与联系人
//!
//! [`SettingsService`] 承载所有管理端写路径的业务规则：
//! 懒创建、外观更新、联系人增删和套餐限制。

pub mod service;

pub use service::SettingsService;
