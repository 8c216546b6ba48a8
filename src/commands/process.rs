//! # 批量处理命令实现
//!
//! 加载图像并按固定顺序执行请求的操作。
//!
//! ## 功能
//! - 从文件/目录加载图像
//! - 缩放 -> 着色 -> 灰度 -> 保存
//! - 以表格形式输出保存结果
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 定义的参数
//! - 使用 `batch/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{ImageCollection, SaveReport};
use crate::cli::Cli;
use crate::error::Result;
use crate::utils::{output, progress};

use tabled::{Table, Tabled};

/// 保存结果行
#[derive(Debug, Clone, Tabled)]
struct SavedRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Size (px)")]
    size: String,
}

/// 执行批量处理
pub fn execute(cli: &Cli) -> Result<()> {
    output::print_header("Bulk Image Processing");

    let mut collection = ImageCollection::from_paths(cli.paths.as_slice())?;

    if collection.is_empty() {
        output::print_warning("No images found in the given paths.");
    } else {
        output::print_info(&format!("Loaded {} image(s)", collection.len()));
    }

    if let Some((width, height)) = cli.size() {
        let pb = progress::create_spinner(&format!("Resizing to {}x{}", width, height));
        let result = collection.resize(width, height);
        pb.finish_and_clear();
        result?;
        output::print_info(&format!("Resized to {}x{}", width, height));
    }

    if let Some(color) = cli.color() {
        collection.colorize(color);
    }

    if cli.grayscale {
        let pb = progress::create_spinner("Converting to grayscale");
        collection.grayscale();
        pb.finish_and_clear();
        output::print_info("Converted to grayscale");
    }

    match &cli.prefix {
        Some(prefix) => {
            let pb = progress::create_spinner("Saving");
            let result = collection.save(prefix, &cli.output_dir);
            pb.finish_and_clear();

            print_report(&result?);
        }
        None => output::print_info("No --prefix given, nothing was written."),
    }

    Ok(())
}

/// 打印保存结果
fn print_report(report: &SaveReport) {
    if !report.files.is_empty() {
        let rows: Vec<SavedRow> = report
            .files
            .iter()
            .map(|saved| SavedRow {
                index: saved.index,
                file: saved.path.display().to_string(),
                size: format!("{}x{}", saved.width, saved.height),
            })
            .collect();

        println!("{}", Table::new(&rows));
    }

    output::print_done(&format!(
        "Saved {} image(s) to '{}'",
        report.files.len(),
        report.directory.display()
    ));
}
