//! shortcut 描述

use alloc::vec::Vec;

use super::ShortcutId;

/// 前端 shortcut 列表中的一项
///
/// 只保存参与 ID 计算的两个字段，均为原始字节
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    target: Vec<u8>,
    name: Vec<u8>,
}

impl Shortcut {
    /// 创建 shortcut，target 原样使用
    pub fn new(target: impl Into<Vec<u8>>, name: impl Into<Vec<u8>>) -> Self {
        Self {
            target: target.into(),
            name: name.into(),
        }
    }

    /// 从可执行文件路径创建 shortcut
    ///
    /// 前端登记可执行文件时会给路径加上双引号，ID 是按加引号后的 target 计算的
    pub fn from_executable(path: &str, name: impl Into<Vec<u8>>) -> Self {
        let mut target = Vec::with_capacity(path.len() + 2);
        target.push(b'"');
        target.extend_from_slice(path.as_bytes());
        target.push(b'"');
        Self {
            target,
            name: name.into(),
        }
    }

    /// target 字节
    pub fn target(&self) -> &[u8] {
        &self.target
    }

    /// name 字节
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    /// 参与计算的字节序列：target 后紧跟 name
    pub fn input_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.target.len() + self.name.len());
        out.extend_from_slice(&self.target);
        out.extend_from_slice(&self.name);
        out
    }

    /// 计算 shortcut ID
    pub fn id(&self) -> ShortcutId {
        ShortcutId::from_parts(&self.target, &self.name)
    }
}
