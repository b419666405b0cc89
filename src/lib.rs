//! # stegem 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：容量估算、分隔符处理、
//! 消息嵌入与提取。

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod delimiter;
pub mod handler;
pub mod steganography;
