//! 파일 탐색 모듈
//!
//! 폴더를 재귀적으로 탐색하여 PNG 파일 목록을 수집합니다.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 파일 이름이 `.png`로 끝나는지 확인 (ASCII 대소문자 무시)
///
/// 이름 바이트로 비교하므로 `.png` 같은 점 파일이나 UTF-8이 아닌
/// 이름도 일치합니다.
pub fn is_png(path: &Path) -> bool {
    const SUFFIX: &[u8] = b".png";

    path.file_name()
        .map(|name| name.as_encoded_bytes())
        .filter(|name| name.len() >= SUFFIX.len())
        .map(|name| name[name.len() - SUFFIX.len()..].eq_ignore_ascii_case(SUFFIX))
        .unwrap_or(false)
}

/// PNG 파일 수집
///
/// # Arguments
/// * `root` - 탐색 시작 폴더
/// * `max_depth` - 최대 탐색 깊이 (None이면 제한 없음)
///
/// # Returns
/// 탐색 순서대로 정렬된 PNG 파일 경로 목록. 읽을 수 없는 항목은 건너뜁니다.
/// 폴더가 아닌 항목은 모두 후보이므로 파일을 가리키는 심볼릭 링크와
/// 끊어진 링크도 포함됩니다. 폴더를 가리키는 링크는 따라가지 않습니다.
pub fn collect_png_files(root: &Path, max_depth: Option<usize>) -> Vec<PathBuf> {
    let walker = match max_depth {
        Some(depth) => WalkDir::new(root).max_depth(depth),
        None => WalkDir::new(root),
    };

    walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| !e.path().is_dir())
        .filter(|e| is_png(e.path()))
        .map(|e| e.into_path())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn test_is_png_case_insensitive() {
        assert!(is_png(Path::new("a.png")));
        assert!(is_png(Path::new("a.PNG")));
        assert!(is_png(Path::new("dir/a.Png")));
        assert!(!is_png(Path::new("a.webp")));
        assert!(!is_png(Path::new("png")));
        assert!(!is_png(Path::new("a.png.bak")));
    }

    #[test]
    fn test_is_png_dotfile_named_png() {
        assert!(is_png(Path::new(".png")));
        assert!(is_png(Path::new("dir/.PNG")));
    }

    #[cfg(unix)]
    #[test]
    fn test_is_png_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"caf\xe9.PNG");
        assert!(is_png(Path::new(name)));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_png_is_collected() {
        use std::os::unix::fs::symlink;

        let source_dir = TempDir::new().unwrap();
        let link_dir = TempDir::new().unwrap();
        let real = touch(source_dir.path(), "real.png");

        symlink(&real, link_dir.path().join("link.png")).unwrap();
        symlink(link_dir.path().join("gone.png"), link_dir.path().join("dangling.png")).unwrap();

        let mut files = collect_png_files(link_dir.path(), None);
        files.sort();
        assert_eq!(
            files,
            vec![
                link_dir.path().join("dangling.png"),
                link_dir.path().join("link.png"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_not_followed() {
        use std::os::unix::fs::symlink;

        let source_dir = TempDir::new().unwrap();
        let link_dir = TempDir::new().unwrap();
        touch(source_dir.path(), "inside.png");

        symlink(source_dir.path(), link_dir.path().join("linked.png")).unwrap();

        assert!(collect_png_files(link_dir.path(), None).is_empty());
    }

    #[test]
    fn test_collect_png_files_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let sub_dir = temp_dir.path().join("nested");
        fs::create_dir(&sub_dir).unwrap();

        touch(temp_dir.path(), "one.png");
        touch(temp_dir.path(), "two.PNG");
        touch(temp_dir.path(), "notes.txt");
        touch(&sub_dir, "three.png");
        touch(&sub_dir, "done.webp");

        let files = collect_png_files(temp_dir.path(), None);
        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|p| is_png(p)));
    }

    #[test]
    fn test_directory_named_like_png_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("folder.png")).unwrap();
        touch(temp_dir.path(), "real.png");

        let files = collect_png_files(temp_dir.path(), None);
        assert_eq!(files, vec![temp_dir.path().join("real.png")]);
    }

    #[test]
    fn test_max_depth() {
        let temp_dir = TempDir::new().unwrap();
        let sub_dir = temp_dir.path().join("subdir");
        fs::create_dir(&sub_dir).unwrap();
        let deep_dir = sub_dir.join("deep");
        fs::create_dir(&deep_dir).unwrap();

        touch(temp_dir.path(), "root.png");
        touch(&sub_dir, "level1.png");
        touch(&deep_dir, "level2.png");

        // max_depth = 2 는 깊이 0, 1 의 파일까지만
        let files = collect_png_files(temp_dir.path(), Some(2));
        assert_eq!(files.len(), 2);
    }
}
