//! 命令行配置
//!
//! 唯一的配置项是日志级别，从环境变量读取。

use log::LevelFilter;

/// 日志级别环境变量名
pub const LOG_ENV_VAR: &str = "SHORTCUT_GAMEID_LOG";

/// 命令行配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliConfig {
    /// 日志级别（输出到 stderr）
    pub log_level: LevelFilter,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Warn,
        }
    }
}

impl CliConfig {
    /// 从进程环境读取配置
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过 `lookup` 查询配置项
    ///
    /// 无法解析的值回退到默认值
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(level) = lookup(LOG_ENV_VAR).and_then(|v| v.trim().parse().ok()) {
            config.log_level = level;
        }
        config
    }
}
