//! pngwebp - PNG TO WEBP CONVERTER
//!
//! 폴더(하위 폴더 포함)의 PNG 이미지를 WebP로 변환하고, 변환 결과가
//! 확인된 경우에만 원본 PNG를 삭제하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🔍 **재귀 탐색**: 대소문자 구분 없이 `.png` 파일 수집
//! - 🎨 **투명도 보존**: 알파 채널이 있으면 RGBA로 인코딩
//! - 🛡️ **안전한 삭제**: WebP 파일이 실제로 존재할 때만 원본 삭제
//! - 🧯 **오류 격리**: 한 파일의 실패가 나머지 변환을 멈추지 않음
//! - 📐 **리사이즈**: 최대 너비 지정 시 비율 유지 축소
//! - 📊 **진행률 및 통계**: 변환/실패 수, 절약 용량 표시
//!
//! # 예제
//!
//! ```bash
//! # 현재 폴더, 품질 80
//! pngwebp
//!
//! # 폴더와 품질 지정
//! pngwebp ./images 90
//!
//! # 원본 유지, 최대 너비 1920
//! pngwebp ./images 75 --keep-originals --max-width 1920
//! ```

pub mod cli;
pub mod codec;
pub mod converter;
pub mod error;
pub mod processor;
pub mod scan;
pub mod stats;

// Re-exports for convenient access
pub use cli::Args;
pub use codec::{has_transparency, webp_destination, EncodeReport, ImageCodec, WebpCodec};
pub use converter::{convert, BatchConverter};
pub use error::{ConvertError, Result};
pub use processor::{process_file, ConvertOptions, Outcome, ProcessResult};
pub use scan::collect_png_files;
pub use stats::{format_bytes, Statistics};
