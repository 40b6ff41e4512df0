//! pngwebp - PNG TO WEBP CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use pngwebp::{
    cli::Args,
    converter::BatchConverter,
    error::ConvertError,
    processor::{Outcome, ProcessResult},
    stats::{format_bytes, reduction_percent},
};

fn main() -> Result<()> {
    // 인자 없이 실행되면 변환 후 사용법도 출력
    let bare_invocation = std::env::args_os().len() <= 1;
    let args = Args::parse();

    if bare_invocation {
        println!(
            "{}",
            "ℹ️  폴더를 지정하지 않아 현재 폴더를 사용합니다.".bright_blue()
        );
    }

    run(&args)?;

    if bare_invocation {
        println!();
        Args::command()
            .print_help()
            .context("사용법 출력 실패")?;
    }

    Ok(())
}

/// 변환 실행
fn run(args: &Args) -> Result<()> {
    let directory = args.directory();
    let converter = BatchConverter::new(args.convert_options());

    print_header(args, &directory);

    // 폴더가 없으면 알리고 정상 종료
    let png_files = match converter.discover(&directory) {
        Ok(files) => files,
        Err(e @ ConvertError::DirectoryNotFound { .. }) => {
            println!("{} {}", "❌".bright_red(), e.to_string().red());
            return Ok(());
        }
        Err(e) => return Err(e).context("PNG 파일 탐색 실패"),
    };

    if png_files.is_empty() {
        println!(
            "{}",
            format!("⚠️ PNG 파일을 찾을 수 없습니다: {:?}", directory).yellow()
        );
        return Ok(());
    }

    println!(
        "  {} 발견된 파일 수: {}",
        "📋".bright_white(),
        png_files.len().to_string().bright_green()
    );

    if args.dry_run {
        print_dry_run(&png_files);
        return Ok(());
    }

    let pb = create_progress_bar(png_files.len());
    println!("\n{}", "🔄 변환 중...".bright_cyan());

    let stats = converter.run(png_files, |result| {
        // 진행률 바가 숨겨져도(파이프, 리다이렉트) 결과 줄은 stdout으로 출력
        pb.suspend(|| println!("{}", describe_result(result, args.verbose)));
        pb.inc(1);
    });

    pb.finish_with_message("완료!");

    stats.print_summary();

    if stats.failed == 0 {
        println!("\n{} 모든 파일이 변환되었습니다!\n", "✅".bright_green());
    } else {
        println!(
            "\n{} {} 개의 파일 변환에 실패했습니다.\n",
            "⚠️".bright_yellow(),
            stats.failed.to_string().red()
        );
    }

    Ok(())
}

/// 헤더 출력
fn print_header(args: &Args, directory: &Path) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!("{}", " 🚀 PNG TO WEBP CONVERTER".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} 대상 폴더: {:?}", "📂".bright_cyan(), directory);
    println!("  {} 품질: {}", "⚙️".bright_yellow(), args.quality());

    if let Some(width) = args.max_width {
        println!("  {} 최대 너비: {}px", "📐".bright_magenta(), width);
    }

    if let Some(depth) = args.max_depth {
        println!("  {} 최대 깊이: {}", "📏".bright_white(), depth);
    }

    if args.keep_originals {
        println!("  {} {}", "📌".bright_cyan(), "원본 PNG 유지".cyan());
    }

    if args.dry_run {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "드라이런 모드 (실제 변환 없음)".yellow()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
    println!("\n{}", "📁 파일 검색 중...".bright_cyan());
}

/// 드라이런 출력
fn print_dry_run(png_files: &[PathBuf]) {
    println!("\n{}", "📋 변환 예정 파일 목록:".bright_cyan());
    for (i, path) in png_files.iter().enumerate() {
        println!("  {}. {:?}", i + 1, path);
    }
    println!(
        "\n{} 총 {} 개의 파일이 변환될 예정입니다.",
        "ℹ️".bright_blue(),
        png_files.len().to_string().bright_green()
    );
}

/// 파일별 결과 한 줄 (verbose면 상세 정보 포함)
fn describe_result(result: &ProcessResult, verbose: bool) -> String {
    match &result.outcome {
        Outcome::Converted(converted) => {
            let mut line = format!(
                "  {} 변환: {:?} -> {:?}",
                "✓".green(),
                result.source,
                result.destination
            );

            if verbose {
                let report = &converted.report;
                let (w, h) = report.output_dimensions;
                line.push_str(&format!(
                    "\n    {}x{}px{}{}, {} -> {} ({:.1}% 감소)",
                    w,
                    h,
                    if report.resized() {
                        format!(
                            " (원본 {}x{}px)",
                            report.source_dimensions.0, report.source_dimensions.1
                        )
                    } else {
                        String::new()
                    },
                    if report.has_alpha { ", 투명도" } else { "" },
                    format_bytes(result.source_size),
                    format_bytes(converted.output_size),
                    reduction_percent(result.source_size, converted.output_size),
                ));
            }

            line
        }
        Outcome::Failed(error) => format!("  {} {}", "✗".red(), error.to_string().red()),
    }
}

/// 진행률 바 생성
fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    pb.set_style(style);
    pb
}
