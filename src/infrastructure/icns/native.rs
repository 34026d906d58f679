/// Native ICNS Writer
///
/// Builds the Apple icon container in-process with the `icns` crate from
/// the PNGs exported in this run. Each size maps to its PNG-capable
/// OSType:
///
/// ```text
/// 16 icp4   32 icp5   64 icp6   128 ic07   256 ic08   512 ic09   1024 ic10
/// ```
///
/// Frames without a matching OSType are ignored. Frames are added in
/// ascending size order.

use async_trait::async_trait;
use icns::{IconFamily, IconType, Image};
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

use super::{IcnsBackend, IcnsError, IcnsRequest};

/// 尺寸与图标类型的对应关系
const PNG_TYPES: [(u32, IconType); 7] = [
    (16, IconType::RGBA32_16x16),
    (32, IconType::RGBA32_32x32),
    (64, IconType::RGBA32_64x64),
    (128, IconType::RGBA32_128x128),
    (256, IconType::RGBA32_256x256),
    (512, IconType::RGBA32_512x512),
    (1024, IconType::RGBA32_512x512_2x),
];

fn icon_type_for(size: u32) -> Option<IconType> {
    PNG_TYPES.iter().find(|(s, _)| *s == size).map(|(_, t)| *t)
}

/// ICNS 数据块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcnsChunk {
    pub ostype: String,
    pub data_len: u32,
    /// 已知的图标类型；未知 OSType（如 TOC）为 None
    pub icon_type: Option<IconType>,
}

#[derive(Debug, Default)]
pub struct NativeIcnsWriter;

impl NativeIcnsWriter {
    pub fn new() -> Self {
        Self
    }

    /// 组装图标族
    fn assemble(&self, request: &IcnsRequest) -> Result<IconFamily, IcnsError> {
        let mut frames: Vec<(u32, IconType, &Path)> = request
            .frames
            .iter()
            .filter_map(|(size, path)| icon_type_for(*size).map(|t| (*size, t, path.as_path())))
            .collect();
        frames.sort_by_key(|(size, _, _)| *size);
        frames.dedup_by_key(|(size, _, _)| *size);

        let mut family = IconFamily::new();
        for (size, icon_type, path) in frames {
            let image = Image::read_png(BufReader::new(File::open(path)?))?;
            if image.width() != size || image.height() != size {
                tracing::warn!(
                    path = %path.display(),
                    expected = size,
                    width = image.width(),
                    height = image.height(),
                    "PNG size mismatch, frame skipped"
                );
                continue;
            }

            family.add_icon_with_type(&image, icon_type)?;
        }

        if family.is_empty() {
            return Err(IcnsError::NoFrames);
        }
        Ok(family)
    }
}

#[async_trait]
impl IcnsBackend for NativeIcnsWriter {
    fn name(&self) -> &str {
        "native"
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn create(&self, request: &IcnsRequest) -> Result<(), IcnsError> {
        let family = self.assemble(request)?;
        let mut out = BufWriter::new(File::create(&request.output)?);
        family.write(&mut out)?;
        out.flush()?;
        tracing::debug!(
            path = %request.output.display(),
            icons = family.elements.len(),
            "ICNS written"
        );
        Ok(())
    }
}

/// 解析 ICNS 数据块列表
pub fn read_icns_chunks(bytes: &[u8]) -> Result<Vec<IcnsChunk>, IcnsError> {
    let family = IconFamily::read(Cursor::new(bytes)).map_err(|e| IcnsError::Malformed(e.to_string()))?;

    Ok(family
        .elements
        .iter()
        .map(|element| IcnsChunk {
            ostype: element.ostype.to_string(),
            data_len: element.data.len() as u32,
            icon_type: element.icon_type(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::encoders::save_png;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use std::path::PathBuf;

    fn frames(dir: &Path, sizes: &[u32]) -> Vec<(u32, PathBuf)> {
        sizes
            .iter()
            .map(|&size| {
                let path = dir.join(format!("icon_{}.png", size));
                save_png(&RgbaImage::from_pixel(size, size, Rgba([0, 0, 255, 255])), &path).unwrap();
                (size, path)
            })
            .collect()
    }

    #[tokio::test]
    async fn test_native_writer_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let request = IcnsRequest {
            source: dir.path().join("icon_512.png"),
            // 48 没有对应的 OSType，应被忽略
            frames: frames(dir.path(), &[512, 16, 48, 128]),
            output: dir.path().join("out.icns"),
        };

        let writer = NativeIcnsWriter::new();
        assert!(writer.is_available().await);
        writer.create(&request).await.unwrap();

        let bytes = fs::read(&request.output).unwrap();
        let chunks = read_icns_chunks(&bytes).unwrap();
        let types: Vec<&str> = chunks.iter().map(|c| c.ostype.as_str()).collect();
        assert_eq!(types, vec!["icp4", "ic07", "ic09"]);

        let family = IconFamily::read(Cursor::new(&bytes)).unwrap();
        assert_eq!(
            family.available_icons(),
            vec![IconType::RGBA32_16x16, IconType::RGBA32_128x128, IconType::RGBA32_512x512]
        );
        let icon = family.get_icon_with_type(IconType::RGBA32_16x16).unwrap();
        assert_eq!((icon.width(), icon.height()), (16, 16));
    }

    #[tokio::test]
    async fn test_native_writer_1024_is_retina_512() {
        let dir = tempfile::tempdir().unwrap();
        let request = IcnsRequest {
            source: dir.path().join("icon_512.png"),
            frames: frames(dir.path(), &[1024]),
            output: dir.path().join("out.icns"),
        };
        NativeIcnsWriter::new().create(&request).await.unwrap();

        let chunks = read_icns_chunks(&fs::read(&request.output).unwrap()).unwrap();
        assert_eq!(chunks[0].ostype, "ic10");
        assert_eq!(chunks[0].icon_type, Some(IconType::RGBA32_512x512_2x));
    }

    #[tokio::test]
    async fn test_native_writer_no_frames() {
        let dir = tempfile::tempdir().unwrap();
        let request = IcnsRequest {
            source: dir.path().join("icon_512.png"),
            frames: frames(dir.path(), &[48]),
            output: dir.path().join("out.icns"),
        };

        let result = NativeIcnsWriter::new().create(&request).await;
        assert!(matches!(result, Err(IcnsError::NoFrames)));
        assert!(!request.output.exists());
    }

    #[tokio::test]
    async fn test_native_writer_skips_mismatched_png() {
        let dir = tempfile::tempdir().unwrap();
        let mut frame_list = frames(dir.path(), &[16, 32]);
        // 声称 64，实际是 32
        frame_list.push((64, frame_list[1].1.clone()));

        let request = IcnsRequest {
            source: dir.path().join("icon_512.png"),
            frames: frame_list,
            output: dir.path().join("out.icns"),
        };
        NativeIcnsWriter::new().create(&request).await.unwrap();

        let chunks = read_icns_chunks(&fs::read(&request.output).unwrap()).unwrap();
        assert_eq!(chunks.len(), 2);
    }

    #[test]
    fn test_read_rejects_bad_header() {
        assert!(matches!(read_icns_chunks(b"icon\0\0\0\x08"), Err(IcnsError::Malformed(_))));
        // 块头被截断
        assert!(matches!(
            read_icns_chunks(b"icns\0\0\0\x0cic07"),
            Err(IcnsError::Malformed(_))
        ));
    }

    #[test]
    fn test_read_empty_container() {
        assert!(read_icns_chunks(b"icns\0\0\0\x08").unwrap().is_empty());
    }
}
