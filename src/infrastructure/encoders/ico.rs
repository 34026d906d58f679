/// ICO Encoder
///
/// Packs already-written PNG files into one Windows icon. Frames are
/// embedded as PNG payloads (supported since Windows Vista), so the bytes
/// on disk are reused as-is instead of being re-encoded.
///
/// Reading back goes through the `ico` crate; a width/height of 256 is
/// stored as 0 in the directory and reported as 256.

use std::fs::{self, File};
use std::io::{BufWriter, Cursor};
use std::path::{Path, PathBuf};

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{ExtendedColorType, ImageFormat};

use super::EncodeError;

/// ICO 目录项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcoEntry {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
    pub bytes: u32,
    pub is_png: bool,
}

/// 把一组 PNG 文件打包成 ICO
///
/// 返回按写入顺序排列的帧尺寸。
pub fn write_ico(pngs: &[PathBuf], output: &Path) -> Result<Vec<u32>, EncodeError> {
    if pngs.is_empty() {
        return Err(EncodeError::NoFrames);
    }

    let mut payloads = Vec::with_capacity(pngs.len());
    for path in pngs {
        let bytes = fs::read(path)?;
        let img = image::load_from_memory_with_format(&bytes, ImageFormat::Png)?;
        let (width, height) = (img.width(), img.height());
        let color_type = ExtendedColorType::from(img.color());
        payloads.push((bytes, width, height, color_type));
    }

    let frames = payloads
        .iter()
        .map(|(bytes, w, h, ct)| IcoFrame::with_encoded(bytes.as_slice(), *w, *h, *ct))
        .collect::<Result<Vec<_>, _>>()?;

    let file = BufWriter::new(File::create(output)?);
    IcoEncoder::new(file).encode_images(&frames)?;

    let sizes = payloads.iter().map(|(_, w, _, _)| *w).collect();
    tracing::debug!(path = %output.display(), ?sizes, "ICO written");
    Ok(sizes)
}

/// 解析 ICO 目录，CUR 文件视为格式错误
pub fn read_ico_directory(bytes: &[u8]) -> Result<Vec<IcoEntry>, EncodeError> {
    let dir = ico::IconDir::read(Cursor::new(bytes))
        .map_err(|e| EncodeError::MalformedIco(e.to_string()))?;

    if dir.resource_type() != ico::ResourceType::Icon {
        return Err(EncodeError::MalformedIco(format!(
            "expected an icon, found {:?}",
            dir.resource_type()
        )));
    }

    Ok(dir
        .entries()
        .iter()
        .map(|entry| IcoEntry {
            width: entry.width(),
            height: entry.height(),
            bits_per_pixel: entry.bits_per_pixel(),
            bytes: entry.data().len() as u32,
            is_png: entry.is_png(),
        })
        .collect())
}

pub fn read_ico_file(path: &Path) -> Result<Vec<IcoEntry>, EncodeError> {
    let bytes = fs::read(path)?;
    read_ico_directory(&bytes)
}
