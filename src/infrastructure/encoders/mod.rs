/// 图像编码器
///
/// - `png`: 单尺寸 PNG 落盘
/// - `ico`: 多帧 ICO 打包与目录解析

pub mod png;
pub mod ico;

pub use ico::{read_ico_directory, read_ico_file, write_ico, IcoEntry};
pub use png::{png_dimensions, save_png};

/// 编码错误类型
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Malformed ICO: {0}")]
    MalformedIco(String),

    #[error("No frames to encode")]
    NoFrames,
}
