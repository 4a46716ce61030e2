// bases/ytget/src/main.rs
mod app;
mod args;
mod output;

use color_eyre::Result;
use video_downloader::VideoDownloader;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // yt-dlp is probed before any argument is looked at; a missing
    // dependency wins over usage errors and even --help.
    let probe = VideoDownloader::new().await;
    let code = app::run(probe, std::env::args_os()).await;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
