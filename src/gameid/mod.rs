//! shortcut ID 生成
//!
//! 64 位 ID 的组装规则：
//!
//! ```text
//! digest = crc32(target ++ name)
//! id     = ((digest | 0x80000000) << 32) | 0x02000000
//! ```
//!
//! target 与 name 之间没有分隔符，也没有长度前缀。

mod grid;
mod id;
mod shortcut;

pub use grid::GridArt;
pub use id::ShortcutId;
pub use shortcut::Shortcut;

use crate::consts::{GAMEID_HIGH_BIT, GAMEID_LOW_WORD};
use crate::crc::crc32;

/// 计算 shortcut ID
///
/// # 参数
///
/// * `input` - target 与 name 拼接后的字节序列，可以为空
///
/// # 返回
///
/// 64 位 ID，最高位恒为 1，低 32 位恒为 `0x02000000`
pub fn compute_identifier(input: &[u8]) -> u64 {
    let digest = crc32(input);
    let id = assemble(digest);
    log::trace!(
        "[GAMEID] len={} crc32={:#010x} id={}",
        input.len(),
        digest,
        id
    );
    id
}

/// 由 CRC32 结果组装 64 位 ID
#[inline]
pub(crate) const fn assemble(digest: u32) -> u64 {
    let top = digest | GAMEID_HIGH_BIT;
    ((top as u64) << 32) | GAMEID_LOW_WORD as u64
}
