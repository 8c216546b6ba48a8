//! # 三点着色
//!
//! 将灰度亮度映射到 黑 -> 中间色 -> 白 的渐变上。
//!
//! ## 算法
//! - 亮度 `0..127` 在黑与中间色之间线性插值
//! - 亮度 `127..255` 在中间色与白之间线性插值
//! - 亮度 `255` 固定为白
//! - 插值结果向下取整并截断到 `0..=255`，通道值本身不做校验
//!
//! ## 依赖关系
//! - 被 `imaging/mod.rs` 导出
//! - 使用 `image` crate

use image::{GrayImage, Rgb, RgbImage};

/// RGB 三元组（允许超出 0..=255，由查找表截断）
pub type RgbTriple = [i32; 3];

pub const BLACK: RgbTriple = [0, 0, 0];
pub const WHITE: RgbTriple = [255, 255, 255];

/// 中间色对应的亮度
const MIDPOINT: i64 = 127;
/// 白色对应的亮度
const WHITEPOINT: i64 = 255;

/// 构建单通道查找表
///
/// 在 `i64` 上计算，任意 `i32` 通道值都不会溢出。
fn channel_lut(black: i32, mid: i32, white: i32) -> [u8; 256] {
    let (black, mid, white) = (i64::from(black), i64::from(mid), i64::from(white));
    let mut lut = [0u8; 256];
    let lower_span = MIDPOINT;
    let upper_span = WHITEPOINT - MIDPOINT;

    for (i, slot) in lut.iter_mut().enumerate() {
        let i = i as i64;
        let value = if i < MIDPOINT {
            black + (i * (mid - black)).div_euclid(lower_span)
        } else if i < WHITEPOINT {
            mid + ((i - MIDPOINT) * (white - mid)).div_euclid(upper_span)
        } else {
            white
        };
        *slot = value.clamp(0, 255) as u8;
    }

    lut
}

/// 按黑/中/白三点渐变为灰度图着色
pub fn colorize(gray: &GrayImage, black: RgbTriple, mid: RgbTriple, white: RgbTriple) -> RgbImage {
    let luts: Vec<[u8; 256]> = (0..3)
        .map(|c| channel_lut(black[c], mid[c], white[c]))
        .collect();

    RgbImage::from_fn(gray.width(), gray.height(), |x, y| {
        let l = gray.get_pixel(x, y).0[0] as usize;
        Rgb([luts[0][l], luts[1][l], luts[2][l]])
    })
}
