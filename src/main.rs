//! # bulkimg - 批量图像处理工具
//!
//! 从文件或目录加载图像，执行缩放、着色、灰度变换，并写入新的输出目录。
//!
//! ## 执行顺序
//! 缩放 -> 着色 -> 灰度 -> 保存（与参数出现顺序无关）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── batch/     (图像集合、路径解析、输出目录)
//!   │           └── imaging/ (解码、变换、编码)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod imaging;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
