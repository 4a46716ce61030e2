// components/video_downloader/src/types.rs
use std::ffi::OsString;
use std::path::PathBuf;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Output path template resolved by yt-dlp to the final file name.
pub const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Format selector used when the caller does not supply one.
pub const DEFAULT_QUALITY: &str = "best[ext=mp4]";

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("yt-dlp is not installed or not in PATH")]
    YtDlpNotFound,

    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Everything needed to invoke a download, built once from the
/// command line and immutable afterwards.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    /// Validated source URL.
    pub url: Url,

    /// Directory to store the downloaded file, `None` meaning the
    /// current working directory.
    pub output_dir: Option<PathBuf>,

    /// Format selector passed verbatim to yt-dlp.
    pub quality: String,
}

impl DownloadRequest {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            output_dir: None,
            quality: DEFAULT_QUALITY.to_owned(),
        }
    }

    /// The `-o` template for yt-dlp, rooted at the output directory
    /// when one was given.
    pub fn output_template(&self) -> OsString {
        match &self.output_dir {
            Some(dir) => dir.join(OUTPUT_TEMPLATE).into_os_string(),
            None => OsString::from(OUTPUT_TEMPLATE),
        }
    }
}

/// Metadata reported by `yt-dlp --dump-json`. Only the fields we
/// present are deserialized, the rest of the document is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoInfo {
    pub title: String,

    /// Duration in seconds. Absent for live streams.
    pub duration: Option<f64>,

    pub uploader: Option<String>,

    pub description: Option<String>,
}
