//! # 终端输出工具
//!
//! 统一的带标签输出：`[OK]`、`[*]`、`[WARN]`、`[ERR]`、`[DONE]`，
//! 以及标题栏和向量组的打印。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块和 `main.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息（stderr）
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印三个带名字的向量，如倒格矢 b1, b2, b3
pub fn print_vectors(prefix: &str, vectors: &[[f64; 3]; 3]) {
    for (i, v) in vectors.iter().enumerate() {
        println!(
            "    {} {:>12.6} {:>12.6} {:>12.6}",
            format!("{}{}", prefix, i + 1).cyan(),
            v[0],
            v[1],
            v[2]
        );
    }
}
