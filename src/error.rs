//! 에러 타입 정의 모듈
//!
//! pngwebp에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// pngwebp에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum ConvertError {
    /// 대상 폴더가 없거나 폴더가 아님
    #[error("폴더를 찾을 수 없습니다: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// 이미지 열기/디코딩 실패
    #[error("이미지 디코딩 실패 ({file}): {reason}")]
    Decode { file: PathBuf, reason: String },

    /// WebP 인코딩 실패
    #[error("WebP 인코딩 실패 ({file}): {reason}")]
    Encode { file: PathBuf, reason: String },

    /// WebP 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({file}): {reason}")]
    Write { file: PathBuf, reason: String },

    /// 인코딩은 끝났지만 결과 파일이 없음
    #[error("저장 실패, 결과 파일이 없습니다: {file}")]
    DestinationMissing { file: PathBuf },

    /// 원본 PNG 삭제 실패
    #[error("원본 삭제 실패 ({file}): {reason}")]
    Remove { file: PathBuf, reason: String },
}

/// pngwebp 결과 타입 별칭
pub type Result<T> = std::result::Result<T, ConvertError>;
