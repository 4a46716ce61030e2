// components/video_downloader/src/ytdlp.rs
use std::ffi::OsString;
use std::io::ErrorKind;
use std::process::Stdio;
use async_trait::async_trait;
use tokio::process::Command;
use url::Url;

use crate::types::{DownloadError, DownloadRequest, VideoInfo};

const YTDLP_BIN: &str = "yt-dlp";

/// Seam to the external downloader. The real implementation shells out
/// to yt-dlp; tests substitute a stub.
#[async_trait]
pub trait Downloader {
    /// Probe the version command; fails when the binary is missing.
    async fn check_available(&self) -> Result<(), DownloadError>;

    /// Fetch title/duration/description metadata without downloading.
    async fn fetch_info(&self, url: &Url) -> Result<VideoInfo, DownloadError>;

    /// Print the formats table for the URL to the console.
    async fn list_formats(&self, url: &Url) -> Result<(), DownloadError>;

    /// Fetch and merge the media described by the request.
    async fn download(&self, request: &DownloadRequest) -> Result<(), DownloadError>;
}

/// The argument vector for a download invocation. Arguments are passed
/// to the subprocess discretely, never through a shell, so quality
/// strings and paths need no quoting or escaping.
pub fn download_args(request: &DownloadRequest) -> Vec<OsString> {
    vec![
        OsString::from("-f"),
        OsString::from(&request.quality),
        OsString::from("--merge-output-format"),
        OsString::from("mp4"),
        OsString::from("-o"),
        request.output_template(),
        OsString::from(request.url.as_str()),
    ]
}

pub struct YtDlp;

impl YtDlp {
    fn command() -> Command {
        Command::new(YTDLP_BIN)
    }
}

#[async_trait]
impl Downloader for YtDlp {
    async fn check_available(&self) -> Result<(), DownloadError> {
        let status = Self::command()
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(status) if status.success() => Ok(()),
            Ok(_) => Err(DownloadError::YtDlpNotFound),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(DownloadError::YtDlpNotFound),
            Err(e) => Err(DownloadError::IoError(e)),
        }
    }

    async fn fetch_info(&self, url: &Url) -> Result<VideoInfo, DownloadError> {
        let output = Self::command()
            .arg("--dump-json")
            .arg("--no-download")
            .arg(url.as_str())
            .output()
            .await?;

        if !output.status.success() {
            return Err(DownloadError::QueryFailed(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }

        serde_json::from_slice(&output.stdout)
            .map_err(|e| DownloadError::QueryFailed(format!("unreadable metadata: {e}")))
    }

    async fn list_formats(&self, url: &Url) -> Result<(), DownloadError> {
        // Stdio is inherited so the formats table streams straight to
        // the console.
        let status = Self::command()
            .arg("-F")
            .arg(url.as_str())
            .status()
            .await?;

        if !status.success() {
            return Err(DownloadError::QueryFailed(format!(
                "yt-dlp exited with status: {status}"
            )));
        }

        Ok(())
    }

    async fn download(&self, request: &DownloadRequest) -> Result<(), DownloadError> {
        // The output directory is not prepared here; yt-dlp resolves
        // the template itself and a missing or unwritable directory
        // surfaces as a download failure.
        let status = Self::command()
            .args(download_args(request))
            .status()
            .await?;

        if !status.success() {
            return Err(DownloadError::DownloadFailed(format!(
                "yt-dlp exited with status: {status}"
            )));
        }

        Ok(())
    }
}
