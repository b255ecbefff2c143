use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};

pub mod contact;

/// 17 October 2026, 14:05 in London
pub static NOW: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| Utc.with_ymd_and_hms(2026, 10, 17, 13, 5, 0).unwrap());
