/// 默认分隔符，固定的 32 位序列。
/// 嵌入时追加在消息比特流末尾，提取时作为终止标记。
pub const DEFAULT_DELIMITER: &str = "00001111000011110000111100001111";

/// 自定义分隔符的最小长度。
/// 过短的分隔符更容易在消息自身的比特流中偶然出现，导致提取提前截断。
pub const MIN_DELIMITER_LEN: usize = 15;

/// 回退生成的随机分隔符长度 (字符数)。
pub const RANDOM_DELIMITER_LEN: usize = 32;

/// 每个像素可承载的比特数。
/// 只使用 R、G、B 三个通道的最低有效位，alpha 通道不参与隐写。
pub const BITS_PER_PIXEL: usize = 3;

/// 每个消息字节展开的比特数 (大端序，最高位在前)。
pub const BITS_PER_BYTE: usize = 8;
