//! PNG 파일 처리 모듈
//!
//! 개별 PNG 파일의 변환, 결과 확인, 원본 삭제를 담당합니다.
//! 한 파일에서 발생한 에러는 [`ProcessResult`]에 담겨 반환되며
//! 호출자에게 전파되지 않습니다.

use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::{webp_destination, EncodeReport, ImageCodec};
use crate::error::{ConvertError, Result};

/// 변환 옵션
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// WebP 품질 (0-100, 범위 검사 없이 코덱에 전달)
    pub quality: i32,
    /// 최대 너비 (None이면 원본 크기 유지)
    pub max_width: Option<u32>,
    /// 최대 폴더 탐색 깊이
    pub max_depth: Option<usize>,
    /// 변환 후 원본 유지
    pub keep_originals: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            quality: crate::cli::DEFAULT_QUALITY,
            max_width: None,
            max_depth: None,
            keep_originals: false,
        }
    }
}

impl ConvertOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 품질 설정
    pub fn with_quality(mut self, quality: i32) -> Self {
        self.quality = quality;
        self
    }

    /// 최대 너비 설정
    pub fn with_max_width(mut self, max_width: Option<u32>) -> Self {
        self.max_width = max_width;
        self
    }

    /// 최대 탐색 깊이 설정
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// 원본 유지 설정
    pub fn with_keep_originals(mut self, keep_originals: bool) -> Self {
        self.keep_originals = keep_originals;
        self
    }
}

/// 변환 성공 정보
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converted {
    /// 코덱 인코딩 정보
    pub report: EncodeReport,
    /// 생성된 WebP 크기
    pub output_size: u64,
    /// 원본 삭제 여부
    pub original_removed: bool,
}

/// 파일 하나의 처리 결과
#[derive(Debug)]
pub enum Outcome {
    Converted(Converted),
    Failed(ConvertError),
}

/// 파일 처리 결과
#[derive(Debug)]
pub struct ProcessResult {
    /// 원본 PNG 경로
    pub source: PathBuf,
    /// WebP 경로
    pub destination: PathBuf,
    /// 원본 파일 크기
    pub source_size: u64,
    /// 처리 결과
    pub outcome: Outcome,
}

impl ProcessResult {
    /// 변환 성공 여부
    pub fn is_converted(&self) -> bool {
        matches!(self.outcome, Outcome::Converted(_))
    }

    /// 에러 (실패 시)
    pub fn error(&self) -> Option<&ConvertError> {
        match &self.outcome {
            Outcome::Failed(e) => Some(e),
            Outcome::Converted(_) => None,
        }
    }

    /// 성공 정보 (성공 시)
    pub fn converted(&self) -> Option<&Converted> {
        match &self.outcome {
            Outcome::Converted(c) => Some(c),
            Outcome::Failed(_) => None,
        }
    }
}

/// 단일 PNG 파일 처리
///
/// 디코딩, 인코딩, 저장 확인, 원본 삭제 순으로 진행합니다.
/// 인코딩이 에러 없이 끝났더라도 WebP 파일이 디스크에 없으면 실패로
/// 처리하고 원본은 남겨둡니다.
///
/// # Arguments
/// * `path` - 처리할 PNG 파일 경로
/// * `codec` - 사용할 코덱
/// * `options` - 변환 옵션
///
/// # Returns
/// 처리 결과를 담은 `ProcessResult`
pub fn process_file<C: ImageCodec + ?Sized>(
    path: PathBuf,
    codec: &C,
    options: &ConvertOptions,
) -> ProcessResult {
    let destination = webp_destination(&path);
    let source_size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

    let outcome = match process_file_internal(&path, &destination, codec, options) {
        Ok(converted) => Outcome::Converted(converted),
        Err(e) => Outcome::Failed(e),
    };

    ProcessResult {
        source: path,
        destination,
        source_size,
        outcome,
    }
}

/// 내부 파일 처리 로직
fn process_file_internal<C: ImageCodec + ?Sized>(
    path: &Path,
    destination: &Path,
    codec: &C,
    options: &ConvertOptions,
) -> Result<Converted> {
    let report = codec.encode(path, destination, options)?;

    // 코덱이 성공을 반환해도 결과 파일을 다시 확인
    if !destination.exists() {
        return Err(ConvertError::DestinationMissing {
            file: destination.to_path_buf(),
        });
    }

    let output_size = fs::metadata(destination).map(|m| m.len()).unwrap_or(0);

    let original_removed = if options.keep_originals {
        false
    } else {
        fs::remove_file(path).map_err(|e| ConvertError::Remove {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        true
    };

    Ok(Converted {
        report,
        output_size,
        original_removed,
    })
}
