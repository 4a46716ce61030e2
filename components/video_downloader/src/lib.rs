// components/video_downloader/src/lib.rs
mod types;
mod validate;
mod ytdlp;

use std::sync::Arc;
use url::Url;

pub use types::{DownloadError, DownloadRequest, VideoInfo, DEFAULT_QUALITY, OUTPUT_TEMPLATE};
pub use validate::validate_url;
pub use ytdlp::{download_args, Downloader};
use ytdlp::YtDlp;

/// Front-end to the external yt-dlp binary. Construction probes for
/// the binary, so a missing dependency is reported before any mode
/// runs.
pub struct VideoDownloader {
    downloader: Arc<dyn Downloader + Send + Sync>,
}

impl std::fmt::Debug for VideoDownloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoDownloader").finish_non_exhaustive()
    }
}

impl VideoDownloader {
    pub async fn new() -> Result<Self, DownloadError> {
        Self::new_with_downloader(Arc::new(YtDlp)).await
    }

    /// Create a VideoDownloader with a specific downloader implementation
    pub async fn new_with_downloader(
        downloader: Arc<dyn Downloader + Send + Sync>,
    ) -> Result<Self, DownloadError> {
        downloader.check_available().await?;
        Ok(Self { downloader })
    }

    /// Fetch title/duration/description for a video without downloading it
    pub async fn fetch_info(&self, url: &Url) -> Result<VideoInfo, DownloadError> {
        self.downloader.fetch_info(url).await
    }

    /// Stream the available-formats table for a video to the console
    pub async fn list_formats(&self, url: &Url) -> Result<(), DownloadError> {
        self.downloader.list_formats(url).await
    }

    /// Download the media described by the request, merged into an mp4
    /// container at the resolved output path
    pub async fn download(&self, request: &DownloadRequest) -> Result<(), DownloadError> {
        self.downloader.download(request).await
    }
}
