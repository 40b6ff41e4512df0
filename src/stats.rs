//! 통계 및 유틸리티 모듈
//!
//! 변환 결과 집계와 요약 출력, 용량/시간 포맷팅을 담당합니다.

use colored::Colorize;
use std::time::{Duration, Instant};

use crate::processor::{Outcome, ProcessResult};

/// 변환 통계 구조체
#[derive(Debug, Default)]
pub struct Statistics {
    /// 발견된 PNG 파일 수
    pub total_files: usize,
    /// 변환 성공 수
    pub converted: usize,
    /// 변환 실패 수
    pub failed: usize,
    /// 삭제된 원본 수
    pub originals_removed: usize,
    /// 변환된 원본의 총 크기
    pub bytes_before: u64,
    /// 생성된 WebP의 총 크기
    pub bytes_after: u64,
    /// 처리 시작 시간
    start_time: Option<Instant>,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 파일 처리 결과 반영
    pub fn record(&mut self, result: &ProcessResult) {
        match &result.outcome {
            Outcome::Converted(converted) => {
                self.converted += 1;
                self.bytes_before += result.source_size;
                self.bytes_after += converted.output_size;
                if converted.original_removed {
                    self.originals_removed += 1;
                }
            }
            Outcome::Failed(_) => self.failed += 1,
        }
    }

    /// 절약된 바이트 (WebP가 더 크면 0)
    pub fn bytes_saved(&self) -> u64 {
        self.bytes_before.saturating_sub(self.bytes_after)
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 변환 요약 출력
    pub fn print_summary(&self) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 변환 결과".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} 전체 파일:    {}",
            "📁".bright_cyan(),
            self.total_files
        );
        println!(
            "  {} 변환 성공:    {}",
            "✅".bright_green(),
            self.converted.to_string().green()
        );

        if self.failed > 0 {
            println!(
                "  {} 실패:         {}",
                "❌".bright_red(),
                self.failed.to_string().red()
            );
        } else {
            println!("  {} 실패:         {}", "✅".bright_green(), "0".green());
        }

        if self.converted > 0 {
            println!(
                "  {} 원본 삭제:    {} / {}",
                "🗑️".bright_yellow(),
                self.originals_removed,
                self.converted
            );
            println!(
                "  {} 원본 용량:    {}",
                "📥".bright_yellow(),
                format_bytes(self.bytes_before)
            );
            println!(
                "  {} WebP 용량:    {}",
                "📤".bright_magenta(),
                format_bytes(self.bytes_after)
            );
            println!(
                "  {} 절약 용량:    {} ({:.1}%)",
                "💾".bright_green(),
                format_bytes(self.bytes_saved()),
                reduction_percent(self.bytes_before, self.bytes_after)
            );
        }

        println!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed())
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 용량 감소율 (%)
///
/// 원본이 0 바이트면 0.0, WebP가 더 크면 음수를 반환합니다.
///
/// # Examples
/// ```
/// use pngwebp::stats::reduction_percent;
///
/// assert_eq!(reduction_percent(1000, 250), 75.0);
/// assert_eq!(reduction_percent(0, 10), 0.0);
/// ```
pub fn reduction_percent(before: u64, after: u64) -> f64 {
    if before == 0 {
        return 0.0;
    }
    100.0 - (after as f64 / before as f64 * 100.0)
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Arguments
/// * `bytes` - 바이트 수
///
/// # Returns
/// 형식화된 문자열 (예: "1.25 MB")
///
/// # Examples
/// ```
/// use pngwebp::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 3600 {
        format!("{}시간 {}분", secs / 3600, (secs % 3600) / 60)
    } else if secs >= 60 {
        format!("{}분 {}초", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}
