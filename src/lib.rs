//! shortcut_gameid: 游戏 shortcut 的 64 位 ID 计算
//!
//! 游戏库前端用这个 ID 给 shortcut 的缓存图片命名。同一对 (target, name)
//! 在任何运行、任何实现中都必须得到同一个 ID：
//! - CRC32（poly `0x04C11DB7`，输入/输出反射，xor in/out 均为 `0xFFFFFFFF`）
//! - 最高位强制为 1
//! - 低 32 位固定为 `0x02000000`
//!
//! # 示例
//!
//! ```rust
//! use shortcut_gameid::{compute_identifier, GridArt, Shortcut};
//!
//! let shortcut = Shortcut::from_executable("C:\\Games\\foo.exe", "Foo");
//! let id = shortcut.id();
//!
//! assert_eq!(id.value(), compute_identifier(b"\"C:\\Games\\foo.exe\"Foo"));
//! assert_eq!(id.value(), 15232140466355961856);
//! assert_eq!(id.grid_file_name(GridArt::Capsule, "png"), "3546509069p.png");
//! ```
//!
//! # 模块结构
//!
//! - [`error`] - 错误类型定义
//! - [`consts`] - 常量定义
//! - [`crc`] - CRC32 计算
//! - [`gameid`] - ID 组装与 shortcut 类型
//! - [`hex`] - 命令行参数的十六进制编解码
//! - `config` - 命令行配置（需要 `std` feature）

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// ===== 核心模块 =====

/// 错误处理
pub mod error;

/// 常量定义
pub mod consts;

/// CRC32 校验和计算
pub mod crc;

/// shortcut ID 生成
pub mod gameid;

/// 十六进制字符对编解码
pub mod hex;

/// 命令行配置
#[cfg(feature = "std")]
pub mod config;

// ===== 公共导出 =====

// 错误处理
pub use error::{Error, ErrorKind, Result};

// ID
pub use gameid::{compute_identifier, GridArt, Shortcut, ShortcutId};
