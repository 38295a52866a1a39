//! 错误类型定义
//!
//! 计算本身不会失败，错误只来自命令行参数的解析。

use core::fmt;

/// shortcut ID 操作错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: &'static str,
    offset: Option<usize>,
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// 缺失或格式错误的参数
    InvalidArgument,
}

impl Error {
    /// 创建新错误
    pub const fn new(kind: ErrorKind, message: &'static str) -> Self {
        Self {
            kind,
            message,
            offset: None,
        }
    }

    /// 创建带位置的错误
    ///
    /// `offset` 是出错字符在参数字符串中的字节偏移
    pub const fn at(kind: ErrorKind, message: &'static str, offset: usize) -> Self {
        Self {
            kind,
            message,
            offset: Some(offset),
        }
    }

    /// 获取错误类型
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// 获取错误消息
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// 获取出错位置
    pub const fn offset(&self) -> Option<usize> {
        self.offset
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)?;
        if let Some(offset) = self.offset {
            write!(f, " (offset {})", offset)?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result 类型别名
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_without_offset() {
        let err = Error::new(ErrorKind::InvalidArgument, "missing argument");
        assert_eq!(err.to_string(), "InvalidArgument: missing argument");
        assert_eq!(err.offset(), None);
    }

    #[test]
    fn test_display_with_offset() {
        let err = Error::at(ErrorKind::InvalidArgument, "not a hex digit", 3);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.to_string(), "InvalidArgument: not a hex digit (offset 3)");
    }
}
