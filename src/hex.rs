//! 十六进制字符对编解码
//!
//! 命令行把 target + name 的原始字节编码成十六进制字符对传入，
//! 这样空格、引号之类的字符不需要 shell 转义。

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{Error, ErrorKind, Result};

const HEX_DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// 解码十六进制字符对
///
/// 每两个字符解析为一个字节，大小写均可。空字符串解码为空字节序列。
///
/// # 错误
///
/// * 长度为奇数
/// * 含有非十六进制字符（包括 `+`、空白等）
pub fn decode_pairs(input: &str) -> Result<Vec<u8>> {
    let raw = input.as_bytes();
    if raw.len() % 2 != 0 {
        log::debug!("[HEX] rejected odd-length argument, len={}", raw.len());
        return Err(Error::at(
            ErrorKind::InvalidArgument,
            "hex string has odd length",
            raw.len() - 1,
        ));
    }

    let mut out = Vec::with_capacity(raw.len() / 2);
    for (i, pair) in raw.chunks_exact(2).enumerate() {
        let offset = i * 2;
        let hi = nibble(pair[0]).ok_or_else(|| invalid_digit(offset))?;
        let lo = nibble(pair[1]).ok_or_else(|| invalid_digit(offset + 1))?;
        out.push((hi << 4) | lo);
    }

    Ok(out)
}

/// 编码为十六进制字符对
///
/// 每个字节固定输出两位大写数字，小于 `0x10` 的字节补零。
pub fn encode_pairs(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_DIGITS_UPPER[(b >> 4) as usize] as char);
        out.push(HEX_DIGITS_UPPER[(b & 0x0F) as usize] as char);
    }
    out
}

#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn invalid_digit(offset: usize) -> Error {
    log::debug!("[HEX] rejected non-hex character at offset {}", offset);
    Error::at(ErrorKind::InvalidArgument, "not a hex digit", offset)
}
