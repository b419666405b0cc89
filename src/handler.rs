//! # 命令处理逻辑模块
//!
//! 包含处理 `embed` 和 `retrieve` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、图像格式校验、分隔符选择、
//! 调用核心隐写算法以及向用户报告结果。

use crate::cli::{EmbedArgs, RetrieveArgs};
use crate::constants::{BITS_PER_BYTE, BITS_PER_PIXEL};
use crate::delimiter;
use crate::steganography::{capacity, embed, extract};
use anyhow::{Context, Result};
use colored::Colorize;
use image::ImageFormat;
use std::fs;
use std::path::{Path, PathBuf};

/// 校验图像格式，并在使用有损格式时向用户发出警告。
///
/// LSB 数据只能在无损格式 (PNG, BMP) 中存活；有损重编码会破坏
/// 最低有效位。这里只警告，不中断操作。
fn validate_image_format(path: &Path) {
    match ImageFormat::from_path(path) {
        Ok(ImageFormat::Png | ImageFormat::Bmp) => {}
        Ok(format) => {
            eprintln!(
                "{}",
                format!(
                    "Warning: {format:?} is not a guaranteed lossless format. \nRe-encoding may corrupt the hidden data. Proceed with caution."
                )
                .yellow()
            );
        }
        Err(_) => {
            eprintln!(
                "{}",
                "Warning: unable to determine the image format from its extension.".yellow()
            );
        }
    }
}

/// 根据用户输入决定实际使用的分隔符，并在回退时告知用户。
///
/// 候选不合法时回退到随机生成的分隔符，此时必须把生成结果打印
/// 出来，否则用户之后无法提取消息。
fn choose_delimiter(candidate: Option<&str>) -> String {
    match candidate {
        Some(candidate) if !delimiter::is_valid(candidate) => {
            eprintln!(
                "{}",
                "Delimiter must consist only of '0' and '1' and be at least 15 characters long. \nFalling back to a generated delimiter.".yellow()
            );
            let fallback = delimiter::generate_random();
            println!(
                "Generated delimiter: {} \nKeep it safe, retrieval requires the exact same delimiter.",
                fallback.green().bold()
            );
            fallback
        }
        _ => delimiter::resolve(candidate),
    }
}

/// 检查输出文件是否可以写入，实现覆盖保护。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {} \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 未指定输出路径时，在输入图像旁生成默认的结果图像路径。
/// 始终使用 .png 扩展名，保证结果以无损格式保存。
fn default_dest(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("embedded_{stem}.png"))
}

/// 处理 'Embed' 命令的执行逻辑。
///
/// 负责读取图像和消息文件、校验图像格式、估算容量并在消息过长时
/// 发出截断警告、调用核心嵌入函数，最后将结果图像写入目标路径。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径、分隔符与覆盖选项的 `EmbedArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或消息文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 无法写入到目标图像文件。
///
/// 消息超出图像容量不是错误：嵌入会继续进行，超出的比特被静默
/// 丢弃，仅向用户发出警告。
pub fn handle_embed(args: EmbedArgs) -> Result<()> {
    validate_image_format(&args.image);

    let picture = image::open(&args.image).with_context(|| {
        format!(
            "Unable to open image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let message = fs::read(&args.text).with_context(|| {
        format!(
            "Unable to read message file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    // 统一转换为 RGB 三通道表示，alpha 通道不参与隐写。
    let mut pixels = picture.to_rgb8();

    let delimiter = choose_delimiter(args.delimiter.as_deref());

    let max_message_size = capacity(pixels.width(), pixels.height());
    println!(
        "The maximum size of the message this image can hold is {} bytes.",
        max_message_size.to_string().green().bold()
    );

    let required_bits = message.len() * BITS_PER_BYTE + delimiter.len();
    let available_bits =
        pixels.width() as usize * pixels.height() as usize * BITS_PER_PIXEL;
    if required_bits > available_bits {
        eprintln!(
            "{}",
            format!(
                "Warning: the message ({} bytes) plus the delimiter does not fit into this image. \nTrailing bits will be dropped and the message will not be recoverable in full.",
                message.len()
            )
            .yellow()
        );
    }

    embed(&mut pixels, &message, &delimiter);

    let dest = args.dest.unwrap_or_else(|| default_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    pixels.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully embedded and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Retrieve' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用核心提取函数扫描分隔符，
/// 最后将提取的消息写入目标文件或打印到终端。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径、分隔符与覆盖选项的 `RetrieveArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 无法写入到目标消息文件。
///
/// 扫描整幅图像未找到分隔符不是错误：向用户报告"未找到隐藏消息"
/// 并正常退出。
pub fn handle_retrieve(args: RetrieveArgs) -> Result<()> {
    validate_image_format(&args.image);

    let picture = image::open(&args.image).with_context(|| {
        format!(
            "Unable to open image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let pixels = picture.to_rgb8();

    let delimiter = choose_delimiter(args.delimiter.as_deref());

    let Some(message) = extract(&pixels, &delimiter) else {
        println!(
            "{}",
            "No hidden message found. \nThe image may not contain a message embedded with this delimiter.".yellow()
        );
        return Ok(());
    };

    match args.text {
        Some(path) => {
            ensure_writable(&path, args.force)?;
            fs::write(&path, &message).with_context(|| {
                format!(
                    "Unable to write to target message file: {}",
                    path.to_string_lossy().red().bold()
                )
            })?;
            println!(
                "The message has been successfully retrieved and saved: {}",
                path.to_string_lossy().green().bold()
            );
        }
        None => {
            println!("Retrieved message: {}", String::from_utf8_lossy(&message));
        }
    }

    Ok(())
}
