//! 이미지 코덱 모듈
//!
//! PNG 디코딩과 WebP 인코딩을 담당합니다. 실제 코덱 작업은 `image`와
//! `webp`(libwebp) 크레이트에 위임하며, 테스트에서 교체할 수 있도록
//! [`ImageCodec`] 트레이트 뒤에 둡니다.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::processor::ConvertOptions;

/// 인코딩 결과 정보
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeReport {
    /// 원본 이미지 크기 (너비, 높이)
    pub source_dimensions: (u32, u32),
    /// 인코딩된 이미지 크기 (리사이즈 시 원본과 다름)
    pub output_dimensions: (u32, u32),
    /// 알파 채널 보존 여부
    pub has_alpha: bool,
}

impl EncodeReport {
    /// 리사이즈 여부
    pub fn resized(&self) -> bool {
        self.source_dimensions != self.output_dimensions
    }
}

/// PNG → WebP 코덱
pub trait ImageCodec {
    /// `source`를 디코딩하여 `destination`에 WebP로 저장
    fn encode(
        &self,
        source: &Path,
        destination: &Path,
        options: &ConvertOptions,
    ) -> Result<EncodeReport>;
}

/// libwebp 기반 손실 압축 코덱
#[derive(Debug, Default, Clone, Copy)]
pub struct WebpCodec;

impl ImageCodec for WebpCodec {
    fn encode(
        &self,
        source: &Path,
        destination: &Path,
        options: &ConvertOptions,
    ) -> Result<EncodeReport> {
        let image = image::open(source).map_err(|e| ConvertError::Decode {
            file: source.to_path_buf(),
            reason: e.to_string(),
        })?;

        let source_dimensions = image.dimensions();
        let image = match options.max_width {
            Some(max_width) => fit_to_width(image, max_width),
            None => image,
        };
        let (width, height) = image.dimensions();
        let has_alpha = has_transparency(&image);

        let memory = encode_lossy(&image, has_alpha, options.quality).map_err(|reason| {
            ConvertError::Encode {
                file: source.to_path_buf(),
                reason,
            }
        })?;

        std::fs::write(destination, &*memory).map_err(|e| ConvertError::Write {
            file: destination.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(EncodeReport {
            source_dimensions,
            output_dimensions: (width, height),
            has_alpha,
        })
    }
}

/// 손실 WebP 인코딩
///
/// 투명도가 있으면 RGBA, 없으면 RGB 레이아웃으로 넘깁니다. 무손실 모드는 쓰지 않습니다.
fn encode_lossy(
    image: &DynamicImage,
    has_alpha: bool,
    quality: i32,
) -> std::result::Result<webp::WebPMemory, String> {
    let (width, height) = image.dimensions();

    if has_alpha {
        let rgba = image.to_rgba8();
        webp::Encoder::from_rgba(rgba.as_raw(), width, height)
            .encode_simple(false, quality as f32)
            .map_err(|e| format!("{:?}", e))
    } else {
        let rgb = image.to_rgb8();
        webp::Encoder::from_rgb(rgb.as_raw(), width, height)
            .encode_simple(false, quality as f32)
            .map_err(|e| format!("{:?}", e))
    }
}

/// 이미지에 투명도 정보가 있는지 확인
///
/// PNG 디코더는 `tRNS` 청크가 있는 팔레트 이미지를 알파 채널이 있는
/// 색상 타입으로 확장하므로, 색상 타입의 알파 여부만 보면 됩니다.
pub fn has_transparency(image: &DynamicImage) -> bool {
    image.color().has_alpha()
}

/// 같은 폴더, 같은 이름에 `.webp` 확장자를 붙인 경로 반환
///
/// # Examples
/// ```
/// use pngwebp::codec::webp_destination;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(webp_destination(Path::new("img/logo.png")), PathBuf::from("img/logo.webp"));
/// assert_eq!(webp_destination(Path::new("img/ICON.PNG")), PathBuf::from("img/ICON.webp"));
/// ```
pub fn webp_destination(path: &Path) -> PathBuf {
    path.with_extension("webp")
}

/// 너비가 `max_width`보다 크면 비율을 유지하며 축소
fn fit_to_width(image: DynamicImage, max_width: u32) -> DynamicImage {
    let (width, height) = image.dimensions();
    if max_width == 0 || width <= max_width {
        return image;
    }

    let new_height = ((height as f64 * max_width as f64) / width as f64).round() as u32;
    image.resize_exact(max_width, new_height.max(1), FilterType::Lanczos3)
}
