//! 常量定义
//!
//! shortcut ID 的格式由外部前端决定，这里的值必须逐位保持一致。

// ===== CRC32 参数 =====

/// CRC 寄存器宽度（位）
pub const CRC_WIDTH: u32 = 32;

/// CRC32 多项式（正常形式）
pub const CRC_POLY: u32 = 0x04C1_1DB7;

/// CRC32 多项式（反射形式，用于 LSB 优先的实现）
pub const CRC_POLY_REFLECTED: u32 = 0xEDB8_8320;

/// 寄存器初始值
pub const CRC_XOR_IN: u32 = 0xFFFF_FFFF;

/// 输出异或值
pub const CRC_XOR_OUT: u32 = 0xFFFF_FFFF;

/// 输入按位反射
pub const CRC_REFLECT_IN: bool = true;

/// 输出按位反射
pub const CRC_REFLECT_OUT: bool = true;

// ===== 64 位 ID 组装 =====

/// 高 32 位强制置位的最高位
pub const GAMEID_HIGH_BIT: u32 = 0x8000_0000;

/// 低 32 位固定值
pub const GAMEID_LOW_WORD: u32 = 0x0200_0000;

/// 启动 URL 前缀
pub const RUNGAMEID_URL_PREFIX: &str = "steam://rungameid/";
