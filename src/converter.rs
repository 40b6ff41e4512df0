//! 일괄 변환 모듈
//!
//! 폴더 확인, PNG 수집, 파일별 순차 변환을 묶어 실행합니다.

use std::path::{Path, PathBuf};

use crate::codec::{ImageCodec, WebpCodec};
use crate::error::{ConvertError, Result};
use crate::processor::{process_file, ConvertOptions, ProcessResult};
use crate::scan::collect_png_files;
use crate::stats::Statistics;

/// PNG → WebP 일괄 변환기
#[derive(Debug)]
pub struct BatchConverter<C = WebpCodec> {
    codec: C,
    options: ConvertOptions,
}

impl BatchConverter<WebpCodec> {
    /// 기본 WebP 코덱을 쓰는 변환기 생성
    pub fn new(options: ConvertOptions) -> Self {
        Self::with_codec(WebpCodec, options)
    }
}

impl<C: ImageCodec> BatchConverter<C> {
    /// 코덱을 지정하여 변환기 생성
    pub fn with_codec(codec: C, options: ConvertOptions) -> Self {
        Self { codec, options }
    }

    /// 대상 폴더를 확인하고 PNG 파일 목록 수집
    ///
    /// 폴더가 없거나 폴더가 아니면 `DirectoryNotFound`를 반환하며
    /// 이 경우 어떤 파일도 건드리지 않습니다.
    pub fn discover(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(ConvertError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }

        Ok(collect_png_files(root, self.options.max_depth))
    }

    /// 파일 목록을 순서대로 변환
    ///
    /// 각 파일의 결과는 `on_result`로 즉시 전달되고 통계에 반영됩니다.
    /// 한 파일의 실패는 다음 파일 처리에 영향을 주지 않습니다.
    pub fn run<F>(&self, files: Vec<PathBuf>, mut on_result: F) -> Statistics
    where
        F: FnMut(&ProcessResult),
    {
        let mut stats = Statistics::new(files.len());

        for path in files {
            let result = process_file(path, &self.codec, &self.options);
            stats.record(&result);
            on_result(&result);
        }

        stats
    }

    /// 폴더 탐색과 변환을 한 번에 실행
    pub fn convert(&self, root: &Path) -> Result<Statistics> {
        let files = self.discover(root)?;
        Ok(self.run(files, |_| {}))
    }
}

/// `directory` 아래의 모든 PNG를 `quality` 품질의 WebP로 변환
///
/// # Examples
/// ```no_run
/// use std::path::Path;
///
/// let stats = pngwebp::convert(Path::new("./images"), 80).unwrap();
/// println!("{} 변환, {} 실패", stats.converted, stats.failed);
/// ```
pub fn convert(directory: &Path, quality: i32) -> Result<Statistics> {
    BatchConverter::new(ConvertOptions::new().with_quality(quality)).convert(directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::EncodeReport;
    use std::fs;
    use tempfile::TempDir;

    /// 이름에 "bad"가 들어간 파일은 실패시키는 코덱
    struct PickyCodec;

    impl ImageCodec for PickyCodec {
        fn encode(
            &self,
            source: &Path,
            destination: &Path,
            _: &ConvertOptions,
        ) -> Result<EncodeReport> {
            if source.to_string_lossy().contains("bad") {
                return Err(ConvertError::Decode {
                    file: source.to_path_buf(),
                    reason: "corrupt".to_string(),
                });
            }
            fs::write(destination, b"webp").unwrap();
            Ok(EncodeReport {
                source_dimensions: (1, 1),
                output_dimensions: (1, 1),
                has_alpha: false,
            })
        }
    }

    #[test]
    fn test_discover_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        let converter = BatchConverter::with_codec(PickyCodec, ConvertOptions::new());
        let err = converter.discover(&missing).unwrap_err();

        assert!(matches!(err, ConvertError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_discover_file_is_not_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("single.png");
        fs::write(&file, b"x").unwrap();

        let converter = BatchConverter::with_codec(PickyCodec, ConvertOptions::new());
        assert!(converter.discover(&file).is_err());
        assert!(file.exists());
    }

    #[test]
    fn test_one_failure_does_not_stop_batch() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["a.png", "bad.png", "c.png"] {
            fs::write(temp_dir.path().join(name), b"x").unwrap();
        }

        let converter = BatchConverter::with_codec(PickyCodec, ConvertOptions::new());
        let files = converter.discover(temp_dir.path()).unwrap();

        let mut seen = Vec::new();
        let stats = converter.run(files, |r| seen.push(r.is_converted()));

        assert_eq!(seen.len(), 3);
        assert_eq!(stats.converted, 2);
        assert_eq!(stats.failed, 1);
        assert!(temp_dir.path().join("bad.png").exists());
        assert!(!temp_dir.path().join("a.png").exists());
        assert!(!temp_dir.path().join("c.png").exists());
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let converter = BatchConverter::with_codec(PickyCodec, ConvertOptions::new());
        let stats = converter.convert(temp_dir.path()).unwrap();

        assert_eq!(stats.total_files, 0);
        assert_eq!(stats.converted, 0);
        assert_eq!(stats.failed, 0);
    }
}
