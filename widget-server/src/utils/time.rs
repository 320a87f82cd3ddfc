//! 时间工具函数 — 业务时区转换
//!
//! 可用性判断基于挂钟时间 (`HH:MM`)，这里统一取业务时区的当前时间。

use chrono::NaiveTime;
use chrono_tz::Tz;

/// 业务时区的当前挂钟时间
pub fn local_now(tz: Tz) -> NaiveTime {
    chrono::Utc::now().with_timezone(&tz).time()
}
