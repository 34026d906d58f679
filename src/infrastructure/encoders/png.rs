//! PNG 落盘

use std::fs;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use super::EncodeError;

/// 保存 PNG，必要时创建父目录
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), EncodeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    img.save_with_format(path, ImageFormat::Png)?;
    tracing::debug!(path = %path.display(), width = img.width(), "PNG written");
    Ok(())
}

/// 只读取头部拿到尺寸，不解码像素
pub fn png_dimensions(path: &Path) -> Result<(u32, u32), EncodeError> {
    Ok(image::image_dimensions(path)?)
}
