//! Poster and backdrop URLs.

pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const BACKDROP_BASE_URL: &str = "https://image.tmdb.org/t/p/w780";

/// Join an image `path` onto `base`. An empty path yields an empty URL.
pub fn image_url(path: &str, base: &str) -> String {
    if path.is_empty() {
        String::new()
    } else if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url() {
        assert_eq!(
            image_url("/abc.jpg", POSTER_BASE_URL),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(
            image_url("abc.jpg", BACKDROP_BASE_URL),
            "https://image.tmdb.org/t/p/w780/abc.jpg"
        );
        assert_eq!(image_url("", POSTER_BASE_URL), "");
    }
}
