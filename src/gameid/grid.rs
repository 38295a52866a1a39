//! 缓存图片类型

/// 前端为 shortcut 缓存的图片类型
///
/// `Legacy` 以完整 64 位 ID 命名，其余以高 32 位 appid 加后缀命名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridArt {
    /// 旧版横幅：`<id>.<ext>`
    Legacy,
    /// 竖版封面：`<appid>p.<ext>`
    Capsule,
    /// 横版封面：`<appid>.<ext>`
    Wide,
    /// 背景大图：`<appid>_hero.<ext>`
    Hero,
    /// 标志：`<appid>_logo.<ext>`
    Logo,
}

impl GridArt {
    /// 所有图片类型
    pub const ALL: [GridArt; 5] = [
        GridArt::Legacy,
        GridArt::Capsule,
        GridArt::Wide,
        GridArt::Hero,
        GridArt::Logo,
    ];

    /// 文件名中 ID 之后的后缀
    pub const fn suffix(self) -> &'static str {
        match self {
            GridArt::Legacy | GridArt::Wide => "",
            GridArt::Capsule => "p",
            GridArt::Hero => "_hero",
            GridArt::Logo => "_logo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixes_are_distinct() {
        // Legacy 与 Wide 靠 ID 宽度区分，其余后缀互不相同
        for a in GridArt::ALL {
            for b in GridArt::ALL {
                let same_file = matches!(
                    (a, b),
                    (GridArt::Legacy, GridArt::Wide) | (GridArt::Wide, GridArt::Legacy)
                );
                if a != b && !same_file {
                    assert_ne!(a.suffix(), b.suffix(), "{:?} vs {:?}", a, b);
                }
            }
        }
    }
}
