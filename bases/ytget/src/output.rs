// bases/ytget/src/output.rs
use std::path::Path;
use video_downloader::{DownloadError, DownloadRequest, VideoInfo};

const SEPARATOR: &str = "=========================================";

/// Descriptions can run to hundreds of lines; only this many are shown.
const DESCRIPTION_LINE_CAP: usize = 20;

pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_download_start(&self, request: &DownloadRequest) {
        println!("Starting download...");
        println!("URL: {}", request.url);
        println!(
            "Output path: {}",
            request
                .output_dir
                .as_deref()
                .map(Path::display)
                .map(|d| d.to_string())
                .unwrap_or_else(|| "current directory".to_owned())
        );
        println!("Quality: {}", request.quality);
        if self.verbose {
            let args: Vec<String> = video_downloader::download_args(request)
                .iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect();
            println!("Executing: yt-dlp {}", args.join(" "));
        }
        println!("{SEPARATOR}");
    }

    pub fn print_download_complete(&self) {
        println!("{SEPARATOR}");
        println!("Download completed successfully!");
    }

    pub fn print_formats_header(&self) {
        println!("Available formats for this video:");
        println!("{SEPARATOR}");
    }

    pub fn print_info(&self, info: &VideoInfo) {
        println!("Video information:");
        println!("{SEPARATOR}");
        println!("Title: {}", info.title);
        if let Some(uploader) = &info.uploader {
            println!("Uploader: {uploader}");
        }
        if let Some(duration) = info.duration {
            println!("Duration: {}", format_duration(duration));
        }
        if let Some(description) = &info.description {
            println!("Description:");
            println!("{}", truncate_lines(description, DESCRIPTION_LINE_CAP));
        }
        println!("{SEPARATOR}");
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("Error: {error}");

        if self.verbose {
            error.chain().skip(1).for_each(|cause| {
                eprintln!("  caused by: {cause}");
            });
        }

        match error.downcast_ref::<DownloadError>() {
            Some(DownloadError::YtDlpNotFound) => {
                eprintln!("Please install yt-dlp first:");
                eprintln!("  pip install yt-dlp");
                eprintln!("  or visit: https://github.com/yt-dlp/yt-dlp");
            }
            Some(DownloadError::DownloadFailed(_)) => {
                eprintln!("Please check:");
                eprintln!("1. Internet connection");
                eprintln!("2. Video URL is correct and accessible");
                eprintln!("3. You have write permissions in the output directory");
                eprintln!("4. The requested quality is available");
            }
            _ => {}
        }
    }
}

/// Keep at most `cap` lines, the way `head` would.
fn truncate_lines(text: &str, cap: usize) -> String {
    text.lines().take(cap).collect::<Vec<_>>().join("\n")
}

/// Seconds to H:MM:SS, or M:SS under an hour.
fn format_duration(seconds: f64) -> String {
    let total = seconds.round() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
