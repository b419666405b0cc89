//! # 隐写核心模块
//!
//! 实现 LSB 隐写的三个核心操作：容量估算、消息嵌入与消息提取。
//! 嵌入与提取共享同一套比特序约定：像素按行优先顺序遍历 (先第一行，
//! 行内从左到右)，每个像素内按 R、G、B 的固定通道顺序处理；消息字节
//! 按大端序展开为 8 个比特。两端的遍历顺序必须完全一致，否则提取
//! 只会得到乱码或找不到分隔符。

use image::RgbImage;

use crate::constants::BITS_PER_PIXEL;

/// 计算图像可嵌入的最大消息长度 (字节)。
///
/// 每个像素的 R、G、B 通道各承载 1 比特，因此总容量为
/// `width * height * 3 / 8` 字节 (向下取整)。该值只是建议上限：
/// 超出容量的嵌入不会失败，只会静默截断 (见 [`embed`])。
pub fn capacity(width: u32, height: u32) -> usize {
    (width as usize * height as usize * BITS_PER_PIXEL) / 8
}

/// 将消息嵌入图像的像素数据中。
///
/// 消息的每个字节按大端序展开为 8 个比特，末尾追加分隔符的
/// '0'/'1' 字符序列，然后按行优先顺序逐像素、逐通道写入各通道的
/// 最低有效位。比特流耗尽后立即停止，剩余像素保持原样。
///
/// 若比特流长度超过 `width * height * 3`，超出的比特会在像素耗尽时
/// 被静默丢弃 (截断)，不视为错误。调用方应事先用 [`capacity`]
/// 检查并向用户发出警告。
pub fn embed(image: &mut RgbImage, message: &[u8], delimiter: &str) {
    let mut bits = message
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |shift| (byte >> shift) & 1))
        .chain(delimiter.bytes().map(|bit| bit & 1));

    'pixels: for pixel in image.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            match bits.next() {
                Some(bit) => *channel = (*channel & !1) | bit,
                None => break 'pixels,
            }
        }
    }
}

/// 从图像的像素数据中提取隐藏的消息。
///
/// 按与 [`embed`] 相同的遍历顺序读取各通道的最低有效位，逐比特累积
/// 为 '0'/'1' 字符串；每追加一个比特就检查累积串是否以分隔符结尾
/// (逐比特检查下等价于"首次出现即命中")，命中后立即停止扫描。
///
/// 命中时，截去分隔符，将剩余比特按 8 个一组重组为字节 (末尾不足
/// 8 比特的残余直接丢弃)，返回 `Some(消息字节)`。扫描完整幅图像仍
/// 未命中则返回 `None`，表示"未检测到隐藏消息"——这是正常的否定
/// 结果，不是错误。
///
/// 注意：若消息自身的比特流中恰好包含分隔符模式，提取会提前截断，
/// 返回被缩短的消息。选用足够长、足够独特的分隔符可以降低这种
/// 碰撞的概率。
pub fn extract(image: &RgbImage, delimiter: &str) -> Option<Vec<u8>> {
    let mut accumulated = String::new();

    'pixels: for pixel in image.pixels() {
        for &channel in pixel.0.iter() {
            accumulated.push(if channel & 1 == 1 { '1' } else { '0' });
            if accumulated.ends_with(delimiter) {
                break 'pixels;
            }
        }
    }

    if !accumulated.ends_with(delimiter) {
        return None;
    }

    let body = &accumulated[..accumulated.len() - delimiter.len()];
    let message = body
        .as_bytes()
        .chunks_exact(8)
        .map(|group| group.iter().fold(0u8, |byte, &bit| (byte << 1) | (bit & 1)))
        .collect();

    Some(message)
}
