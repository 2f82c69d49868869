use candid::CandidType;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Level
///

#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, CandidType, Display, Serialize, Deserialize,
)]
pub enum Level {
    Debug, // least severe
    Info,
    Ok,
    Warn,
    Error, // most severe
}

///
/// Topic
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum Topic {
    Access,
    Config,
    Init,
    Journal,
    Memory,
    Ownership,
    Registry,
    Upgrade,
}

#[macro_export]
macro_rules! log {
    // =========================================
    // (1) With topic (normal + trailing comma)
    // =========================================
    ($topic:expr, $level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log::__emit(Some($topic), $crate::log::Level::$level, &format!($fmt $(, $arg)*));
    }};

    // =========================================
    // (2) No topic (normal + trailing comma)
    // =========================================
    ($level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log::__emit(None, $crate::log::Level::$level, &format!($fmt $(, $arg)*));
    }};
}

///
/// Helpers
///

#[doc(hidden)]
pub fn __emit(topic: Option<Topic>, level: Level, message: &str) {
    if level < min_level() {
        return;
    }

    let line = format_line(topic, level, message);

    #[cfg(target_arch = "wasm32")]
    crate::cdk::println!("{line}");

    #[cfg(not(target_arch = "wasm32"))]
    println!("{line}");
}

fn min_level() -> Level {
    crate::config::Config::try_get().map_or(Level::Info, |cfg| cfg.log.min_level)
}

fn format_line(topic: Option<Topic>, level: Level, message: &str) -> String {
    let (color, reset) = match level {
        Level::Ok => ("\x1b[32m", "\x1b[0m"),
        Level::Info => ("\x1b[34m", "\x1b[0m"),
        Level::Warn => ("\x1b[33m", "\x1b[0m"),
        Level::Error => ("\x1b[31m", "\x1b[0m"),
        Level::Debug => ("", ""),
    };

    let label = format!("{color}{:^5}{reset}", level.to_string().to_uppercase());

    match topic {
        Some(t) => format!("{label}| [{t}] {message}"),
        None => format!("{label}| {message}"),
    }
}

///
/// TESTS
///
