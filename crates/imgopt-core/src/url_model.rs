//! Request URL and output path derivation for an [`ImageSpec`].

use crate::catalog::ImageSpec;
use std::path::{Path, PathBuf};
use url::Url;

/// Extension of every output artifact.
pub const OUTPUT_EXTENSION: &str = "webp";

/// Parse the image host base URL. A trailing `/` is added when missing so that
/// identifiers are appended as a new path segment rather than replacing the last one.
pub fn parse_base_url(base: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Builds `{base}/{identifier}?w={width}&q={source_quality}`.
///
/// # Examples
///
/// - base `https://images.unsplash.com/`, `photo-1`, width 1920, q 80 →
///   `https://images.unsplash.com/photo-1?w=1920&q=80`
pub fn image_url(base: &Url, spec: &ImageSpec, source_quality: u8) -> Result<Url, url::ParseError> {
    let mut url = base.join(spec.id)?;
    url.query_pairs_mut()
        .clear()
        .append_pair("w", &spec.width.to_string())
        .append_pair("q", &source_quality.to_string());
    Ok(url)
}

/// Deterministic artifact path: `{output_dir}/{identifier}.webp`.
pub fn artifact_path(output_dir: &Path, spec: &ImageSpec) -> PathBuf {
    output_dir.join(format!("{}.{}", spec.id, OUTPUT_EXTENSION))
}
