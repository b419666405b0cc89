//! # 分隔符模块
//!
//! 负责校验与生成标记消息结尾的二进制分隔符。嵌入与提取必须使用
//! 同一个分隔符，否则提取无法定位消息边界。

use rand::Rng;

use crate::constants::{DEFAULT_DELIMITER, MIN_DELIMITER_LEN, RANDOM_DELIMITER_LEN};

/// 检查候选分隔符是否合法：只含 '0'/'1' 字符，且长度不小于
/// [`MIN_DELIMITER_LEN`]。
pub fn is_valid(candidate: &str) -> bool {
    candidate.len() >= MIN_DELIMITER_LEN
        && candidate.bytes().all(|bit| bit == b'0' || bit == b'1')
}

/// 生成一个长度为 [`RANDOM_DELIMITER_LEN`] 的随机二进制分隔符。
/// 每个字符独立地以 50/50 概率从 {'0', '1'} 中抽取。
pub fn generate_random() -> String {
    let mut rng = rand::rng();
    (0..RANDOM_DELIMITER_LEN)
        .map(|_| if rng.random_bool(0.5) { '1' } else { '0' })
        .collect()
}

/// 决定实际使用的分隔符。
///
/// * `None` —— 调用方未自定义，返回固定的 [`DEFAULT_DELIMITER`]。
/// * `Some(candidate)` 且候选合法 —— 原样返回候选。
/// * `Some(candidate)` 且候选不合法 —— 回退到随机生成的 32 位
///   二进制分隔符，每次调用各不相同。
pub fn resolve(candidate: Option<&str>) -> String {
    match candidate {
        None => DEFAULT_DELIMITER.to_owned(),
        Some(candidate) if is_valid(candidate) => candidate.to_owned(),
        Some(_) => generate_random(),
    }
}
