// bases/ytget/src/app.rs
use clap::Parser;
use color_eyre::Result;
use std::ffi::OsString;
use video_downloader::{validate_url, DownloadError, DownloadRequest, VideoDownloader};

use crate::args::{Args, Mode};
use crate::output::OutputHandler;

/// The full CLI flow, returning the process exit code. The dependency
/// probe result is examined before any argument is looked at, so a
/// missing yt-dlp wins over usage errors and even --help. Usage errors
/// exit 1; help and version go to stdout and exit 0.
pub async fn run<I, T>(probe: Result<VideoDownloader, DownloadError>, argv: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let downloader = match probe {
        Ok(downloader) => downloader,
        Err(error) => {
            OutputHandler::new(false).print_error(&error.into());
            return 1;
        }
    };

    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(error) => {
            let code = if error.use_stderr() { 1 } else { 0 };
            let _ = error.print();
            return code;
        }
    };

    let app = App::new(args);
    if let Err(error) = app.run(&downloader).await {
        app.print_error(&error);
        return 1;
    }
    0
}

pub struct App {
    args: Args,
    output: OutputHandler,
}

impl App {
    pub fn new(args: Args) -> Self {
        let output = OutputHandler::new(args.verbose);
        Self { args, output }
    }

    pub async fn run(&self, downloader: &VideoDownloader) -> Result<()> {
        let url = validate_url(self.args.url())?;

        match self.args.mode() {
            Mode::ShowInfo => {
                let info = downloader.fetch_info(&url).await?;
                self.output.print_info(&info);
            }
            Mode::ListFormats => {
                self.output.print_formats_header();
                downloader.list_formats(&url).await?;
            }
            Mode::Download => {
                let request = DownloadRequest {
                    url,
                    output_dir: self.args.output.clone(),
                    quality: self.args.quality.clone(),
                };

                self.output.print_download_start(&request);
                downloader.download(&request).await?;
                self.output.print_download_complete();
            }
        }

        Ok(())
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use url::Url;
    use video_downloader::{Downloader, VideoInfo};

    #[derive(Clone, Default)]
    struct StubDownloader {
        calls: Arc<Mutex<Vec<String>>>,
        requests: Arc<Mutex<Vec<DownloadRequest>>>,
    }

    #[async_trait]
    impl Downloader for StubDownloader {
        async fn check_available(&self) -> Result<(), DownloadError> {
            self.calls.lock().unwrap().push("check_available".to_owned());
            Ok(())
        }

        async fn fetch_info(&self, _url: &Url) -> Result<VideoInfo, DownloadError> {
            self.calls.lock().unwrap().push("fetch_info".to_owned());
            Ok(VideoInfo {
                title: "Test Video".to_owned(),
                duration: Some(212.0),
                uploader: Some("Test Channel".to_owned()),
                description: None,
            })
        }

        async fn list_formats(&self, _url: &Url) -> Result<(), DownloadError> {
            self.calls.lock().unwrap().push("list_formats".to_owned());
            Ok(())
        }

        async fn download(&self, request: &DownloadRequest) -> Result<(), DownloadError> {
            self.calls.lock().unwrap().push("download".to_owned());
            self.requests.lock().unwrap().push(request.clone());
            Ok(())
        }
    }

    async fn downloader(stub: &StubDownloader) -> VideoDownloader {
        VideoDownloader::new_with_downloader(Arc::new(stub.clone()))
            .await
            .unwrap()
    }

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("ytget")
            .chain(args.iter().copied())
            .map(str::to_owned)
            .collect()
    }

    #[tokio::test]
    async fn missing_dependency_beats_help() {
        let code = run(Err(DownloadError::YtDlpNotFound), argv(&["-h"])).await;
        assert_eq!(code, 1);
    }

    #[tokio::test]
    async fn missing_dependency_beats_usage_errors() {
        let code = run(Err(DownloadError::YtDlpNotFound), argv(&[])).await;
        assert_eq!(code, 1);
    }

    #[tokio::test]
    async fn help_exits_zero_when_dependency_is_present() {
        let stub = StubDownloader::default();
        let code = run(Ok(downloader(&stub).await), argv(&["-h"])).await;
        assert_eq!(code, 0);
        assert_eq!(*stub.calls.lock().unwrap(), vec!["check_available"]);
    }

    #[tokio::test]
    async fn missing_url_exits_one() {
        let stub = StubDownloader::default();
        let code = run(Ok(downloader(&stub).await), argv(&[])).await;
        assert_eq!(code, 1);
    }

    #[tokio::test]
    async fn invalid_url_exits_one_without_dispatch() {
        let stub = StubDownloader::default();
        let code = run(
            Ok(downloader(&stub).await),
            argv(&["https://example.com/notyoutube"]),
        )
        .await;
        assert_eq!(code, 1);
        assert_eq!(*stub.calls.lock().unwrap(), vec!["check_available"]);
    }

    #[tokio::test]
    async fn download_dispatches_the_parsed_request() {
        let stub = StubDownloader::default();
        let code = run(
            Ok(downloader(&stub).await),
            argv(&["-o", "/tmp/out", "-q", "720p[ext=mp4]", "https://youtu.be/abc"]),
        )
        .await;
        assert_eq!(code, 0);

        let requests = stub.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].output_dir, Some(PathBuf::from("/tmp/out")));
        assert_eq!(requests[0].quality, "720p[ext=mp4]");
        assert_eq!(requests[0].url.as_str(), "https://youtu.be/abc");
    }

    #[tokio::test]
    async fn info_wins_over_list_formats() {
        let stub = StubDownloader::default();
        let code = run(
            Ok(downloader(&stub).await),
            argv(&["-i", "-l", "https://youtu.be/abc"]),
        )
        .await;
        assert_eq!(code, 0);
        assert_eq!(
            *stub.calls.lock().unwrap(),
            vec!["check_available", "fetch_info"]
        );
    }

    #[tokio::test]
    async fn last_of_several_urls_is_downloaded() {
        let stub = StubDownloader::default();
        let code = run(
            Ok(downloader(&stub).await),
            argv(&["https://youtu.be/first", "https://youtu.be/second"]),
        )
        .await;
        assert_eq!(code, 0);

        let requests = stub.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.as_str(), "https://youtu.be/second");
    }
}
