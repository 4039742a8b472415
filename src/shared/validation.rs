use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating YouTube URLs on the site-settings endpoint
    /// - Valid: "https://www.youtube.com/watch?v=abc", "https://youtu.be/abc"
    /// - Invalid: "not-a-url", "https://vimeo.com/123"
    pub static ref YOUTUBE_URL_REGEX: Regex =
        Regex::new(r"^https?://(www\.)?(youtube\.com|youtu\.be)/.+$").unwrap();
}
