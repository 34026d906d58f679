/// Glyph Drawing Primitives
///
/// Pixel-level drawing on an `RgbaImage`. Every write replaces the target
/// pixel outright (no alpha compositing) and writes outside the canvas are
/// dropped, so the primitives are safe at any size including 1x1.
///
/// ## Shapes
/// - `fill_gradient`: diagonal background
/// - `draw_k`: blocky "K" made of a vertical bar and two stepped arms
/// - `draw_spark`: filled disc in the upper-right quadrant

use image::{Rgba, RgbaImage};

use super::palette::Gradient;

/// 越界写入直接忽略
fn put(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x < img.width() && y < img.height() {
        img.put_pixel(x, y, color);
    }
}

/// 用渐变填满整个画布
pub fn fill_gradient(img: &mut RgbaImage, gradient: &Gradient) {
    let size = img.width();
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = gradient.sample(x, y, size);
    }
}

/// "K" 字形的几何参数（全部由画布尺寸整除得到）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KGlyph {
    /// 笔画宽度 size / 8
    pub stroke: u32,
    /// 竖笔高度 size - size / 4
    pub height: u32,
    /// 竖笔左边界 size / 4
    pub left: u32,
    /// 竖笔上边界 size / 8
    pub top: u32,
}

impl KGlyph {
    pub fn for_size(size: u32) -> Self {
        Self {
            stroke: size / 8,
            height: size - size / 4,
            left: size / 4,
            top: size / 8,
        }
    }

    /// 斜笔的 x 起点
    fn arm_x(&self, step: u32) -> u32 {
        self.left + self.stroke + step
    }
}

/// 画 "K"
///
/// 每一步 `i` 在上下两条斜笔上各画一段宽 `stroke` 的水平线段。
/// 线段起点越界时整段跳过；起点在画布内时只裁掉越出右边界的部分。
pub fn draw_k(img: &mut RgbaImage, color: Rgba<u8>) {
    let size = img.width();
    let k = KGlyph::for_size(size);

    // 竖笔
    for y in k.top..k.top + k.height {
        for x in k.left..k.left + k.stroke {
            put(img, x as i64, y as i64, color);
        }
    }

    // 斜笔
    for i in 0..k.height / 2 {
        let x = k.arm_x(i);
        let upper = k.top + i;
        let lower = k.top + k.height - i - 1;

        for y in [upper, lower] {
            if x >= size || y >= size {
                continue;
            }
            for w in 0..k.stroke {
                put(img, (x + w) as i64, y as i64, color);
            }
        }
    }
}

/// 火花的圆心和半径
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spark {
    pub cx: i64,
    pub cy: i64,
    pub radius: i64,
}

impl Spark {
    pub fn for_size(size: u32) -> Self {
        Self {
            cx: (size - size / 4) as i64,
            cy: (size / 4) as i64,
            radius: (size / 16) as i64,
        }
    }

    pub fn covers(&self, dx: i64, dy: i64) -> bool {
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// 画火花（实心圆）
pub fn draw_spark(img: &mut RgbaImage, color: Rgba<u8>) {
    let spark = Spark::for_size(img.width());
    let r = spark.radius;

    for dy in -r..=r {
        for dx in -r..=r {
            if spark.covers(dx, dy) {
                put(img, spark.cx + dx, spark.cy + dy, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 235]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn blank(size: u32) -> RgbaImage {
        RgbaImage::from_pixel(size, size, CLEAR)
    }

    #[test]
    fn test_k_metrics() {
        let k = KGlyph::for_size(64);
        assert_eq!(k, KGlyph { stroke: 8, height: 48, left: 16, top: 8 });
    }

    #[test]
    fn test_k_vertical_bar() {
        let mut img = blank(64);
        draw_k(&mut img, WHITE);

        // 竖笔覆盖 x 16..24, y 8..56
        assert_eq!(*img.get_pixel(16, 8), WHITE);
        assert_eq!(*img.get_pixel(23, 55), WHITE);
        assert_eq!(*img.get_pixel(15, 30), CLEAR);
        assert_eq!(*img.get_pixel(16, 7), CLEAR);
        assert_eq!(*img.get_pixel(16, 56), CLEAR);
    }

    #[test]
    fn test_k_arms() {
        let mut img = blank(64);
        draw_k(&mut img, WHITE);

        // i = 0: 上斜笔 (24..32, 8)，下斜笔 (24..32, 55)
        assert_eq!(*img.get_pixel(24, 8), WHITE);
        assert_eq!(*img.get_pixel(31, 8), WHITE);
        assert_eq!(*img.get_pixel(32, 8), CLEAR);
        assert_eq!(*img.get_pixel(24, 55), WHITE);

        // i = 23 是最后一步
        assert_eq!(*img.get_pixel(47, 31), WHITE);
        assert_eq!(*img.get_pixel(47, 32), WHITE);
        assert_eq!(*img.get_pixel(54, 31), WHITE);
        assert_eq!(*img.get_pixel(55, 31), CLEAR);
    }

    #[test]
    fn test_k_on_tiny_canvas() {
        // stroke 为 0，什么都不画，也不能 panic
        let mut img = blank(4);
        draw_k(&mut img, WHITE);
        assert!(img.pixels().all(|p| *p == CLEAR));

        let mut img = blank(1);
        draw_k(&mut img, WHITE);
        assert_eq!(*img.get_pixel(0, 0), CLEAR);
    }

    #[test]
    fn test_spark_disc() {
        let mut img = blank(64);
        draw_spark(&mut img, WHITE);

        // 圆心 (48, 16)，半径 4
        assert_eq!(*img.get_pixel(48, 16), WHITE);
        assert_eq!(*img.get_pixel(52, 16), WHITE);
        assert_eq!(*img.get_pixel(48, 12), WHITE);
        assert_eq!(*img.get_pixel(53, 16), CLEAR);
        // 外接正方形的角不在圆内
        assert_eq!(*img.get_pixel(52, 20), CLEAR);

        let painted = img.pixels().filter(|p| **p == WHITE).count();
        assert_eq!(painted, 49);
    }

    #[test]
    fn test_spark_zero_radius_paints_center() {
        let mut img = blank(8);
        draw_spark(&mut img, WHITE);
        assert_eq!(*img.get_pixel(6, 2), WHITE);
        assert_eq!(img.pixels().filter(|p| **p == WHITE).count(), 1);
    }

    #[test]
    fn test_fill_gradient_covers_canvas() {
        let mut img = blank(16);
        fill_gradient(&mut img, &Gradient::default());
        assert!(img.pixels().all(|p| p.0[3] == 255));
    }
}
