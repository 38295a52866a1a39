//! 64 位 shortcut ID 类型

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use byteorder::{ByteOrder, LittleEndian};

use super::{assemble, GridArt};
use crate::consts::{GAMEID_HIGH_BIT, GAMEID_LOW_WORD, RUNGAMEID_URL_PREFIX};
use crate::crc::{crc32, crc32_append};
use crate::error::{Error, ErrorKind, Result};

/// shortcut ID
///
/// 只能通过计算或 [`FromStr`] 校验后得到，因此始终满足：
/// - 第 63 位为 1
/// - 低 32 位为 `0x02000000`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShortcutId(u64);

impl ShortcutId {
    /// 对已拼接好的字节序列计算 ID
    pub fn from_bytes(input: &[u8]) -> Self {
        Self(super::compute_identifier(input))
    }

    /// 对 target 和 name 计算 ID
    ///
    /// 与 `from_bytes(target ++ name)` 结果相同，但不分配拼接缓冲区
    pub fn from_parts(target: &[u8], name: &[u8]) -> Self {
        let digest = crc32_append(crc32(target), name);
        let id = assemble(digest);
        log::trace!(
            "[GAMEID] target_len={} name_len={} crc32={:#010x} id={}",
            target.len(),
            name.len(),
            digest,
            id
        );
        Self(id)
    }

    /// 获取 64 位值
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// 高 32 位（shortcut 列表中的 appid）
    #[inline]
    pub const fn app_id(&self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// appid 的小端字节表示
    ///
    /// 二进制 shortcut 列表以 4 字节小端整数存储 appid
    pub fn app_id_le_bytes(&self) -> [u8; 4] {
        let mut buf = [0u8; 4];
        LittleEndian::write_u32(&mut buf, self.app_id());
        buf
    }

    /// 启动该 shortcut 的 URL
    pub fn rungameid_url(&self) -> String {
        format!("{}{}", RUNGAMEID_URL_PREFIX, self.0)
    }

    /// 缓存图片的文件名
    ///
    /// # 参数
    ///
    /// * `kind` - 图片类型
    /// * `ext` - 扩展名，不含 `.`
    pub fn grid_file_name(&self, kind: GridArt, ext: &str) -> String {
        match kind {
            GridArt::Legacy => format!("{}.{}", self.0, ext),
            _ => format!("{}{}.{}", self.app_id(), kind.suffix(), ext),
        }
    }

    fn is_well_formed(value: u64) -> bool {
        let high = (value >> 32) as u32;
        let low = value as u32;
        high & GAMEID_HIGH_BIT != 0 && low == GAMEID_LOW_WORD
    }
}

impl fmt::Display for ShortcutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ShortcutId {
    type Err = Error;

    /// 从十进制字符串解析，并校验 ID 的格式
    fn from_str(s: &str) -> Result<Self> {
        let value: u64 = s
            .parse()
            .map_err(|_| Error::new(ErrorKind::InvalidArgument, "not a decimal integer"))?;

        if !Self::is_well_formed(value) {
            return Err(Error::new(ErrorKind::InvalidArgument, "not a shortcut id"));
        }

        Ok(Self(value))
    }
}

impl From<ShortcutId> for u64 {
    fn from(id: ShortcutId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_from_parts_matches_concatenation() {
        let target = b"\"C:\\Games\\foo.exe\"";
        let name = b"Foo";
        let joined = ShortcutId::from_bytes(b"\"C:\\Games\\foo.exe\"Foo");
        assert_eq!(ShortcutId::from_parts(target, name), joined);
        assert_eq!(joined.value(), 15232140466355961856);

        assert_eq!(ShortcutId::from_parts(b"", b""), ShortcutId::from_bytes(b""));
        assert_eq!(ShortcutId::from_parts(b"1234", b"56789"), ShortcutId::from_bytes(b"123456789"));
    }

    #[test]
    fn test_app_id() {
        let id = ShortcutId::from_bytes(b"\"C:\\Games\\foo.exe\"Foo");
        assert_eq!(id.app_id(), 0xD363_6F0D);
        assert_eq!(id.app_id_le_bytes(), [0x0D, 0x6F, 0x63, 0xD3]);

        let empty = ShortcutId::from_bytes(b"");
        assert_eq!(empty.app_id(), 0x8000_0000);
        assert_eq!(empty.app_id_le_bytes(), [0x00, 0x00, 0x00, 0x80]);
    }

    #[test]
    fn test_display_and_url() {
        let id = ShortcutId::from_bytes(b"123456789");
        assert_eq!(id.to_string(), "14696434319421865984");
        assert_eq!(id.rungameid_url(), "steam://rungameid/14696434319421865984");
        assert_eq!(u64::from(id), 14696434319421865984);
    }

    #[test]
    fn test_grid_file_names() {
        let id = ShortcutId::from_bytes(b"123456789");
        assert_eq!(id.grid_file_name(GridArt::Legacy, "png"), "14696434319421865984.png");
        assert_eq!(id.grid_file_name(GridArt::Capsule, "png"), "3421780262p.png");
        assert_eq!(id.grid_file_name(GridArt::Wide, "jpg"), "3421780262.jpg");
        assert_eq!(id.grid_file_name(GridArt::Hero, "png"), "3421780262_hero.png");
        assert_eq!(id.grid_file_name(GridArt::Logo, "png"), "3421780262_logo.png");
    }

    #[test]
    fn test_from_str() {
        let id: ShortcutId = "14696434319421865984".parse().unwrap();
        assert_eq!(id, ShortcutId::from_bytes(b"123456789"));

        // 最高位未置位
        let err = "33554432".parse::<ShortcutId>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        // 低字不是 0x02000000
        assert!("14696434319421865985".parse::<ShortcutId>().is_err());
        assert!("abc".parse::<ShortcutId>().is_err());
        assert!("".parse::<ShortcutId>().is_err());
        assert!("-1".parse::<ShortcutId>().is_err());
    }
}
