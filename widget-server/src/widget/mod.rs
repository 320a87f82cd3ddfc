//! 店面小部件模块 - 可用性判断与片段渲染
//!
//! # 内容
//!
//! - [`availability`] - 纯函数的联系人可用时段判断
//! - [`WidgetRenderer`] - 自包含 HTML/CSS/JS 片段渲染器

pub mod availability;
pub mod renderer;

pub use renderer::{RenderedWidget, WidgetRenderer};
