//! CRC32 校验和计算
//!
//! shortcut ID 使用的 CRC32 参数：
//!
//! | 参数 | 值 |
//! |------|----|
//! | width | 32 |
//! | poly | `0x04C11DB7` |
//! | reflect in / out | 是 / 是 |
//! | xor in / out | `0xFFFFFFFF` / `0xFFFFFFFF` |
//!
//! 这组参数与 crc32fast 的 IEEE CRC32 完全一致，查表实现直接用它；
//! [`crc32_bit_by_bit`] 是逐位的参考实现，两者对任意输入逐位相同。

use crc32fast::Hasher;

use crate::consts::{CRC_POLY, CRC_REFLECT_IN, CRC_REFLECT_OUT, CRC_WIDTH, CRC_XOR_IN, CRC_XOR_OUT};

/// 计算 CRC32 校验和（一次性计算）
#[inline]
pub fn crc32(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

/// 计算 CRC32 校验和（追加模式）
///
/// # 参数
/// * `crc` - 之前数据的 CRC32 结果（空数据为 0）
/// * `data` - 追加的数据
///
/// # 返回
/// 等于对拼接后数据调用 [`crc32`] 的结果
#[inline]
pub fn crc32_append(crc: u32, data: &[u8]) -> u32 {
    let mut hasher = Hasher::new_with_initial(crc);
    hasher.update(data);
    hasher.finalize()
}

/// 逐位计算 CRC32（参考实现）
///
/// MSB 优先的教科书算法，按 [`crate::consts`] 中的参数处理输入反射和输出反射。
pub fn crc32_bit_by_bit(data: &[u8]) -> u32 {
    let mut register = CRC_XOR_IN;

    for &byte in data {
        let byte = if CRC_REFLECT_IN {
            reflect(byte as u32, 8)
        } else {
            byte as u32
        };

        for i in (0..8).rev() {
            let bit = (byte >> i) & 1;
            let top = register >> (CRC_WIDTH - 1);
            register <<= 1;
            if top ^ bit != 0 {
                register ^= CRC_POLY;
            }
        }
    }

    if CRC_REFLECT_OUT {
        register = reflect(register, CRC_WIDTH);
    }

    register ^ CRC_XOR_OUT
}

/// 反转 `value` 低 `width` 位的顺序
///
/// `width` 取值 1..=32，高于 `width` 的位被丢弃
#[inline]
pub fn reflect(value: u32, width: u32) -> u32 {
    debug_assert!((1..=32).contains(&width));
    value.reverse_bits() >> (32 - width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CRC_POLY_REFLECTED;

    #[test]
    fn test_crc32_check_value() {
        // CRC-32/ISO-HDLC 的标准校验值
        assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
        assert_eq!(crc32_bit_by_bit(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn test_crc32_empty() {
        assert_eq!(crc32(b""), 0);
        assert_eq!(crc32_bit_by_bit(b""), 0);
    }

    #[test]
    fn test_table_matches_bit_by_bit() {
        let inputs: [&[u8]; 6] = [
            b"a",
            b"\"C:\\Games\\foo.exe\"Foo",
            b"/usr/bin/retroarchRetroArch",
            &[0x00, 0xFF, 0x20],
            &[0x00; 17],
            "名前".as_bytes(),
        ];
        for input in inputs {
            assert_eq!(crc32(input), crc32_bit_by_bit(input), "input {:?}", input);
        }

        // 覆盖所有单字节值
        for b in 0..=255u8 {
            assert_eq!(crc32(&[b]), crc32_bit_by_bit(&[b]), "byte {:#04x}", b);
        }
    }

    #[test]
    fn test_crc32_incremental() {
        let data1 = b"\"C:\\Games\\foo.exe\"";
        let data2 = b"Foo";

        // 一次计算
        let crc_once = crc32(b"\"C:\\Games\\foo.exe\"Foo");

        // 分两次计算
        let crc1 = crc32(data1);
        let crc2 = crc32_append(crc1, data2);

        assert_eq!(crc_once, crc2);
        assert_eq!(crc32_append(0, b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn test_reflect() {
        assert_eq!(reflect(0x01, 8), 0x80);
        assert_eq!(reflect(0x31, 8), 0x8C);
        assert_eq!(reflect(CRC_POLY, 32), CRC_POLY_REFLECTED);
        assert_eq!(reflect(0xFFFF_FF01, 8), 0x80);
    }
}
