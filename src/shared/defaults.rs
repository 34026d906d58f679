//! 默认导出参数
//!
//! CLI 默认值和用例默认配置共用这里的常量。

/// PNG 导出尺寸
pub const DEFAULT_PNG_SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

/// ICO 候选尺寸（只有同时出现在 PNG 尺寸中的才会被嵌入）
pub const DEFAULT_ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// ICNS 由该尺寸的 PNG 生成
pub const ICNS_SOURCE_SIZE: u32 = 512;

/// 渲染尺寸上限
pub const MAX_ICON_SIZE: u32 = 1024;

/// ICO 目录项用一个字节存宽高，0 表示 256
pub const MAX_ICO_SIZE: u32 = 256;

pub const DEFAULT_ASSETS_DIR: &str = "assets/icons";
pub const DEFAULT_ICON_NAME: &str = "killer";
pub const DEFAULT_PRODUCT: &str = "KillerTools";
pub const DEFAULT_ICNS_TOOL: &str = "icnsutil";
pub const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 30;
