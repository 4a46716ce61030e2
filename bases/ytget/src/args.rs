// bases/ytget/src/args.rs
use clap::Parser;
use std::path::PathBuf;

const QUALITY_HELP: &str = "\
Quality options:
  best[ext=mp4]          Best quality MP4 (default)
  worst[ext=mp4]         Worst quality MP4
  720p[ext=mp4]          720p MP4
  480p[ext=mp4]          480p MP4
  360p[ext=mp4]          360p MP4
  bestvideo+bestaudio    Best video + best audio (requires ffmpeg)

Examples:
  ytget https://www.youtube.com/watch?v=dQw4w9WgXcQ
  ytget -o ~/Downloads -q 720p https://youtu.be/dQw4w9WgXcQ
  ytget -l https://www.youtube.com/watch?v=dQw4w9WgXcQ";

/// Download YouTube videos via yt-dlp
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = QUALITY_HELP)]
pub struct Args {
    /// YouTube URL (watch page, youtu.be link, playlist, or channel)
    #[arg(required = true, num_args = 1.., value_name = "URL")]
    pub urls: Vec<String>,

    /// Output directory (default: current directory)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Video quality/format selector
    #[arg(
        short,
        long,
        value_name = "FORMAT",
        default_value = video_downloader::DEFAULT_QUALITY
    )]
    pub quality: String,

    /// List available formats for the video
    #[arg(short, long)]
    pub list_formats: bool,

    /// Show video information (title, duration, description)
    #[arg(short, long)]
    pub info: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Download,
    ListFormats,
    ShowInfo,
}

impl Args {
    /// The effective URL. Extra positional tokens are tolerated and
    /// the last one wins.
    pub fn url(&self) -> &str {
        self.urls.last().map(String::as_str).unwrap_or_default()
    }

    /// Mutually exclusive dispatch, info taking priority over
    /// list-formats over download.
    pub fn mode(&self) -> Mode {
        if self.info {
            Mode::ShowInfo
        } else if self.list_formats {
            Mode::ListFormats
        } else {
            Mode::Download
        }
    }
}
