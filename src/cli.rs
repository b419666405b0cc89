//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中嵌入或提取隐藏消息。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中嵌入或提取隐藏消息。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：embed (嵌入) 和 retrieve (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在无损格式图像 (如 PNG, BMP) 中嵌入文本文件内容。
    Embed(EmbedArgs),

    /// 从经过隐写的图像中提取隐藏的消息。
    Retrieve(RetrieveArgs),
}

/// 'embed' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EmbedArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要嵌入的消息内容的文件路径。
    #[arg(short, long)]
    pub text: PathBuf,

    /// 嵌入完成后，保存结果图像的输出路径。
    /// 省略时默认保存为输入图像旁的 `embedded_<原文件名>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 自定义分隔符，只能由 '0'/'1' 组成且长度不小于 15。
    /// 省略时使用内置的默认分隔符；不合法时回退到随机生成的分隔符。
    #[arg(short = 'D', long)]
    pub delimiter: Option<String>,

    /// 强制覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'retrieve' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RetrieveArgs {
    /// 已嵌入消息的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 提取消息后，保存消息内容的输出路径。
    /// 省略时直接将消息打印到终端。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 嵌入时使用的分隔符，必须与嵌入端完全一致。
    /// 省略时使用内置的默认分隔符。
    #[arg(short = 'D', long)]
    pub delimiter: Option<String>,

    /// 强制覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}
