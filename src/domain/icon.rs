/// Icon Renderer
///
/// Composes the icon layers onto a transparent square canvas:
/// gradient background, then the "K" glyph, then the spark. Layer order
/// matters because the primitives overwrite rather than blend.
///
/// ## Example
/// ```rust,ignore
/// use icon_forge::domain::IconRenderer;
///
/// let renderer = IconRenderer::new();
/// let img = renderer.render(256);
/// assert_eq!(img.dimensions(), (256, 256));
/// ```

use image::{Rgba, RgbaImage};

use super::glyph::{draw_k, draw_spark, fill_gradient};
use super::palette::{Gradient, GLYPH_COLOR};

/// 图标样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconStyle {
    pub background: Gradient,
    pub glyph: Rgba<u8>,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            background: Gradient::default(),
            glyph: GLYPH_COLOR,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IconRenderer {
    style: IconStyle,
}

impl IconRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: IconStyle) -> Self {
        Self { style }
    }

    /// 渲染 size x size 的图标
    pub fn render(&self, size: u32) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));

        fill_gradient(&mut img, &self.style.background);
        draw_k(&mut img, self.style.glyph);
        draw_spark(&mut img, self.style.glyph);

        img
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dimensions() {
        let renderer = IconRenderer::new();
        for size in [1, 16, 32, 64, 128] {
            let img = renderer.render(size);
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    #[test]
    fn test_render_layers() {
        let renderer = IconRenderer::new();
        let img = renderer.render(128);

        // 左上角只有背景
        assert_eq!(*img.get_pixel(0, 0), Rgba([124, 58, 237, 255]));
        // 竖笔 (32..48, 16..112)
        assert_eq!(*img.get_pixel(40, 64), GLYPH_COLOR);
        // 火花圆心 (96, 32)
        assert_eq!(*img.get_pixel(96, 32), GLYPH_COLOR);
        // 右下角仍是背景
        assert_eq!(img.get_pixel(127, 127).0[3], 255);
        assert_ne!(*img.get_pixel(127, 127), GLYPH_COLOR);
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = IconRenderer::new();
        assert_eq!(renderer.render(64), renderer.render(64));
    }

    #[test]
    fn test_custom_style() {
        let style = IconStyle {
            background: Gradient::new([0, 0, 0], [0, 0, 0]),
            glyph: Rgba([1, 2, 3, 4]),
        };
        let img = IconRenderer::with_style(style).render(64);
        assert_eq!(*img.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(*img.get_pixel(48, 16), Rgba([1, 2, 3, 4]));
    }
}
