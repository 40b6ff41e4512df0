//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

use crate::processor::ConvertOptions;

/// 기본 WebP 품질
pub const DEFAULT_QUALITY: i32 = 80;

/// pngwebp CLI 인자 구조체
#[derive(Parser, Debug, Default)]
#[command(
    name = "pngwebp",
    author = "YourName <your@email.com>",
    version,
    about = "PNG TO WEBP CONVERTER - 폴더 내 PNG 이미지를 WebP로 변환하는 CLI 도구",
    long_about = r#"
PNG TO WEBP CONVERTER
=====================

지정된 폴더와 하위 폴더의 모든 PNG 파일을 찾아
같은 위치에 WebP(손실 압축)로 변환하고,
변환된 파일이 확인되면 원본 PNG를 삭제합니다.

특징:
  • 투명도(알파 채널) 보존
  • 파일별 오류 격리 (한 파일 실패가 전체를 멈추지 않음)
  • 진행률 표시 및 용량 절감 통계
  • 최대 너비 지정 시 비율 유지 리사이즈

예제:
  pngwebp
  pngwebp ./images
  pngwebp ./images 90
  pngwebp ./images 75 --max-width 1920 --verbose
  pngwebp ./images --dry-run
"#
)]
pub struct Args {
    /// PNG 파일들이 있는 폴더 경로 (기본값: 현재 폴더)
    pub directory: Option<PathBuf>,

    /// WebP 품질 0-100 (기본값: 80)
    #[arg(allow_negative_numbers = true)]
    pub quality: Option<i32>,

    /// 최대 너비 (픽셀). 더 넓은 이미지는 비율을 유지하며 축소
    #[arg(long)]
    pub max_width: Option<u32>,

    /// 최대 폴더 탐색 깊이
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// 변환 후 원본 PNG를 삭제하지 않음
    #[arg(long)]
    pub keep_originals: bool,

    /// 실제 변환 없이 처리될 파일 목록만 표시
    #[arg(long)]
    pub dry_run: bool,

    /// 상세 출력 모드
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 대상 폴더 (미지정 시 현재 폴더)
    pub fn directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// WebP 품질 (미지정 시 80)
    pub fn quality(&self) -> i32 {
        self.quality.unwrap_or(DEFAULT_QUALITY)
    }

    /// 인자로부터 변환 옵션 생성
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions::new()
            .with_quality(self.quality())
            .with_max_width(self.max_width)
            .with_max_depth(self.max_depth)
            .with_keep_originals(self.keep_originals)
    }
}
