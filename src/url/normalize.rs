use crate::UrlError;
use url::Url;

/// Parses a user-supplied target into a site URL
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace; reject empty input
/// 2. Prefix `http://` when the input does not start with `http`
/// 3. Parse the URL; reject if malformed
/// 4. Accept only HTTP and HTTPS
/// 5. Require a host
///
/// # Arguments
///
/// * `target` - A URL or bare host, e.g. `example.com` or `https://example.com/page`
///
/// # Returns
///
/// * `Ok(Url)` - The parsed site URL
/// * `Err(UrlError)` - The target cannot name a website
///
/// # Examples
///
/// ```
/// use robolens::url::parse_target;
///
/// let url = parse_target("example.com/blog").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/blog");
/// ```
pub fn parse_target(target: &str) -> Result<Url, UrlError> {
    let target = target.trim();
    if target.is_empty() {
        return Err(UrlError::Parse("URL is required".to_string()));
    }

    let candidate = if target.starts_with("http") {
        target.to_string()
    } else {
        format!("http://{}", target)
    };

    let url = Url::parse(&candidate).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}

/// Derives the robots.txt location for a target
///
/// The robots URL keeps the scheme, host and any explicit port of the target;
/// path, query, fragment and credentials are dropped.
///
/// # Examples
///
/// ```
/// use robolens::url::robots_url;
///
/// let url = robots_url("https://Example.com/blog?page=2#top").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/robots.txt");
/// ```
pub fn robots_url(target: &str) -> Result<Url, UrlError> {
    let site = parse_target(target)?;
    let host = site.host_str().ok_or(UrlError::MissingHost)?;

    let origin = match site.port() {
        Some(port) => format!("{}://{}:{}", site.scheme(), host, port),
        None => format!("{}://{}", site.scheme(), host),
    };

    Url::parse(&format!("{}/robots.txt", origin)).map_err(|e| UrlError::Parse(e.to_string()))
}
