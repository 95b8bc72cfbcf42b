/// Renditions the catalog image CDN serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    /// Cards and the detail overlay.
    W500,
    /// Hero banner.
    Original,
}

impl ImageSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::W500 => "w500",
            ImageSize::Original => "original",
        }
    }
}

/// Full image URL for a catalog path such as `/kqjL17yufvn9OVLyXYpvtyrFfak.jpg`.
/// Absolute URLs pass through untouched.
pub fn image_url(base_url: &str, size: ImageSize, path: &str) -> String {
    if path.starts_with("http") {
        return path.to_string();
    }
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        size.as_str(),
        path.trim_start_matches('/')
    )
}
