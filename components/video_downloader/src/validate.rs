// components/video_downloader/src/validate.rs
use crate::types::DownloadError;
use url::Url;

/// Parse and validate a YouTube URL.
///
/// The check is structural: scheme must be http(s), the host must be
/// youtube.com (or a subdomain) or youtu.be, and the path must have one
/// of the recognized shapes (watch page, short link, playlist, channel).
/// A YouTube-looking substring elsewhere in the URL is not enough, so
/// `https://evil.com/?x=youtube.com/watch` is rejected.
pub fn validate_url(input: &str) -> Result<Url, DownloadError> {
    if input.trim().is_empty() {
        return Err(DownloadError::InvalidUrl("empty URL".to_owned()));
    }

    let url = Url::parse(input).map_err(|e| DownloadError::InvalidUrl(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(DownloadError::InvalidUrl(format!(
                "unsupported scheme '{other}'"
            )))
        }
    }

    let host = url
        .host_str()
        .ok_or_else(|| DownloadError::InvalidUrl("missing host".to_owned()))?
        .to_ascii_lowercase();

    let recognized = if host == "youtu.be" {
        // Short links carry the video id as the path.
        url.path().len() > 1
    } else if host == "youtube.com" || host.ends_with(".youtube.com") {
        let path = url.path();
        path == "/watch"
            || path == "/playlist"
            || path == "/channel"
            || path.starts_with("/channel/")
    } else {
        return Err(DownloadError::InvalidUrl(format!(
            "host '{host}' is not YouTube"
        )));
    };

    if recognized {
        Ok(url)
    } else {
        Err(DownloadError::InvalidUrl(format!(
            "unrecognized YouTube path '{}'",
            url.path()
        )))
    }
}
