use clap::Parser;

use stegem::{
    cli::{Cli, Commands},
    handler::{handle_embed, handle_retrieve},
};

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的子命令（`embed` 或 `retrieve`）
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Embed(args) => handle_embed(args),
        Commands::Retrieve(args) => handle_retrieve(args),
    }
}
