// SPDX-License-Identifier: MPL-2.0
//! Fetching image bytes from disk or over HTTP.

use super::image::{self, ImageData};
use crate::config::{MAX_ASSET_BYTES, MAX_REDIRECTS};
use crate::domain::asset::AssetSource;
use crate::error::AssetError;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

/// Where and how images are fetched.
#[derive(Debug, Clone)]
pub struct LoaderSettings {
    pub image_dir: PathBuf,
    pub fetch_remote: bool,
}

/// Loads and decodes one image reference.
///
/// File reads and decoding run on the blocking thread pool.
///
/// # Errors
///
/// Returns the [`AssetError`] describing why the image cannot be shown.
pub async fn load(source: AssetSource, settings: LoaderSettings) -> Result<ImageData, AssetError> {
    match source {
        AssetSource::Local(relative) => {
            run_blocking(move || load_local(&settings.image_dir, &relative)).await
        }
        AssetSource::Remote(url) => {
            if !settings.fetch_remote {
                return Err(AssetError::Disabled);
            }
            log::debug!("downloading image {}", url);
            let (bytes, content_type) = download(&url).await?;
            run_blocking(move || image::decode(bytes, content_type.as_deref().or(Some(&url))))
                .await
        }
    }
}

async fn run_blocking<F>(work: F) -> Result<ImageData, AssetError>
where
    F: FnOnce() -> Result<ImageData, AssetError> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .unwrap_or_else(|e| Err(AssetError::Decode(format!("image task failed: {e}"))))
}

fn load_local(image_dir: &Path, relative: &str) -> Result<ImageData, AssetError> {
    let path = resolve_local(image_dir, relative)?;
    log::debug!("reading image {}", path.display());
    let bytes = read_local(&path)?;
    image::decode(bytes, Some(relative))
}

/// Joins a relative reference onto the image directory.
///
/// References that try to leave the directory are reported as not found.
fn resolve_local(image_dir: &Path, relative: &str) -> Result<PathBuf, AssetError> {
    let relative_path = Path::new(relative);
    let escapes = relative_path
        .components()
        .any(|component| !matches!(component, Component::Normal(_) | Component::CurDir));
    if relative.is_empty() || escapes {
        return Err(AssetError::NotFound(relative.to_string()));
    }
    Ok(image_dir.join(relative_path))
}

fn read_local(path: &Path) -> Result<Vec<u8>, AssetError> {
    let metadata =
        std::fs::metadata(path).map_err(|_| AssetError::NotFound(path.display().to_string()))?;
    if metadata.len() > MAX_ASSET_BYTES as u64 {
        return Err(AssetError::TooLarge);
    }
    std::fs::read(path).map_err(|_| AssetError::NotFound(path.display().to_string()))
}

static HTTP_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Shared client so every download reuses one connection pool.
fn http_client() -> Result<&'static reqwest::Client, AssetError> {
    if let Some(client) = HTTP_CLIENT.get() {
        return Ok(client);
    }
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .user_agent(concat!("IcedFolio/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(HTTP_CLIENT.get_or_init(|| client))
}

/// Downloads `url`, returning the body and its content type.
async fn download(url: &str) -> Result<(Vec<u8>, Option<String>), AssetError> {
    use futures_util::StreamExt;

    let response = http_client()?.get(url).send().await?;

    if !response.status().is_success() {
        return Err(AssetError::Http(response.status().as_u16()));
    }

    if response
        .content_length()
        .is_some_and(|len| len > MAX_ASSET_BYTES as u64)
    {
        return Err(AssetError::TooLarge);
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if body.len() + chunk.len() > MAX_ASSET_BYTES {
            return Err(AssetError::TooLarge);
        }
        body.extend_from_slice(&chunk);
    }

    Ok((body, content_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn settings(dir: &Path, fetch_remote: bool) -> LoaderSettings {
        LoaderSettings {
            image_dir: dir.to_path_buf(),
            fetch_remote,
        }
    }

    #[tokio::test]
    async fn loads_local_png() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::fs::create_dir_all(temp_dir.path().join("img")).expect("mkdir failed");
        RgbaImage::from_pixel(3, 5, Rgba([0, 0, 255, 255]))
            .save(temp_dir.path().join("img/tile.png"))
            .expect("failed to write png");

        let data = load(
            AssetSource::parse("/img/tile.png"),
            settings(temp_dir.path(), false),
        )
        .await
        .expect("local image should load");
        assert_eq!((data.width(), data.height()), (3, 5));
    }

    #[tokio::test]
    async fn missing_local_file_is_not_found() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load(
            AssetSource::parse("/img/missing.png"),
            settings(temp_dir.path(), true),
        )
        .await;
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[tokio::test]
    async fn remote_fetch_respects_setting() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load(
            AssetSource::parse("https://skillicons.dev/icons?i=rust"),
            settings(temp_dir.path(), false),
        )
        .await;
        assert_eq!(result.err(), Some(AssetError::Disabled));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn concurrent_loads_complete_on_single_threaded_runtime() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for index in 0..4u32 {
            RgbaImage::from_pixel(index + 1, 2, Rgba([255, 0, 0, 255]))
                .save(temp_dir.path().join(format!("tile-{index}.png")))
                .expect("failed to write png");
        }

        let loads = (0..4u32).map(|index| {
            load(
                AssetSource::parse(&format!("tile-{index}.png")),
                settings(temp_dir.path(), false),
            )
        });
        let results = futures_util::future::join_all(loads).await;

        for (index, result) in (0u32..).zip(results) {
            let data = result.expect("local image should load");
            assert_eq!(data.width(), index + 1);
        }
    }

    #[test]
    fn http_client_is_shared() {
        let first = http_client().expect("client should build");
        let second = http_client().expect("client should build");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn parent_components_are_rejected() {
        let base = Path::new("/srv/site");
        assert!(resolve_local(base, "../secret.png").is_err());
        assert!(resolve_local(base, "").is_err());
        assert_eq!(
            resolve_local(base, "img/a.png").ok(),
            Some(PathBuf::from("/srv/site/img/a.png"))
        );
    }
}
