//! 颜色定义与渐变采样
//!
//! 背景是从左上角到右下角的对角线渐变（紫 → 青），
//! 字形和火花使用半透明白色。

use image::Rgba;

/// 渐变起点 #7C3AED
pub const GRADIENT_START: [u8; 3] = [0x7C, 0x3A, 0xED];

/// 渐变终点 #06B6D4
pub const GRADIENT_END: [u8; 3] = [0x06, 0xB6, 0xD4];

/// 字形颜色：白色，alpha 235
pub const GLYPH_COLOR: Rgba<u8> = Rgba([255, 255, 255, 235]);

/// 对角线线性渐变
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub start: [u8; 3],
    pub end: [u8; 3],
}

impl Gradient {
    pub const fn new(start: [u8; 3], end: [u8; 3]) -> Self {
        Self { start, end }
    }

    /// 采样 (x, y) 处的颜色
    ///
    /// 位置 `t = (x + y) / (2 * size)`，各通道线性插值后向零截断。
    /// 右下角像素的 `t` 小于 1，所以终点颜色本身不会出现在画布上。
    pub fn sample(&self, x: u32, y: u32, size: u32) -> Rgba<u8> {
        let t = (x as f64 + y as f64) / (2.0 * size as f64);
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t) as u8;

        Rgba([
            lerp(self.start[0], self.end[0]),
            lerp(self.start[1], self.end[1]),
            lerp(self.start[2], self.end[2]),
            255,
        ])
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::new(GRADIENT_START, GRADIENT_END)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_origin_is_start_color() {
        let gradient = Gradient::default();
        assert_eq!(gradient.sample(0, 0, 16), Rgba([124, 58, 237, 255]));
        assert_eq!(gradient.sample(0, 0, 1024), Rgba([124, 58, 237, 255]));
    }

    #[test]
    fn test_gradient_far_corner_truncates() {
        // t = 30 / 32 = 0.9375
        let gradient = Gradient::default();
        assert_eq!(gradient.sample(15, 15, 16), Rgba([13, 174, 213, 255]));
    }

    #[test]
    fn test_gradient_midpoint() {
        // t = 0.5
        let gradient = Gradient::default();
        assert_eq!(gradient.sample(16, 16, 32), Rgba([65, 120, 224, 255]));
    }

    #[test]
    fn test_gradient_symmetric_in_x_and_y() {
        let gradient = Gradient::default();
        assert_eq!(gradient.sample(3, 9, 64), gradient.sample(9, 3, 64));
    }
}
