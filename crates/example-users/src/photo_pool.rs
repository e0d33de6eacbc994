//! Avatar URL pool and JSON loading.
//!
//! A pool is a JSON array of absolute `http`/`https` URLs. Seeding shuffles
//! the pool once and hands entries out round-robin. An empty pool is valid
//! and leaves every avatar blank.

use camino::Utf8Path;
use cap_std::fs::Dir;
use url::Url;

use crate::error::PhotoPoolError;

const BUILT_IN_PHOTOS: [&str; 10] = [
    "https://images.unsplash.com/photo-1600267185393-e158a98703de?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&q=80&w=800",
    "https://images.unsplash.com/photo-1579710039144-85d6bdffddc9?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&q=80&w=800",
    "https://images.unsplash.com/photo-1488426862026-3ee34a7d66df?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&q=80&w=800",
    "https://images.unsplash.com/photo-1620252655460-080dbec533ca?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&q=80&w=800",
    "https://images.unsplash.com/photo-1613679074971-91fc27180061?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&q=80&w=800",
    "https://images.unsplash.com/photo-1485795959911-ea5ebf41b6ae?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&q=80&w=800",
    "https://images.unsplash.com/photo-1545996124-0501ebae84d0?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&q=80&w=800",
    "https://images.unsplash.com/flagged/photo-1568225061049-70fb3006b5be?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&q=80&w=800",
    "https://images.unsplash.com/photo-1567186937675-a5131c8a89ea?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&q=80&w=800",
    "https://images.unsplash.com/photo-1546456073-92b9f0a8d413?crop=entropy&cs=tinysrgb&fit=crop&fm=jpg&h=600&q=80&w=800",
];

/// Validated list of avatar URLs.
///
/// # Example
///
/// ```
/// use example_users::PhotoPool;
///
/// let pool = PhotoPool::from_json(r#"["https://a.example/1.jpg"]"#).expect("valid pool");
/// assert_eq!(pool.len(), 1);
/// assert_eq!(PhotoPool::default().len(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoPool {
    urls: Vec<String>,
}

impl PhotoPool {
    /// Validates and wraps `urls`.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoPoolError::InvalidUrl`] for the first entry that is not
    /// an absolute `http` or `https` URL.
    pub fn new(urls: Vec<String>) -> Result<Self, PhotoPoolError> {
        for (index, value) in urls.iter().enumerate() {
            if !is_http_url(value) {
                return Err(PhotoPoolError::InvalidUrl {
                    index,
                    value: value.clone(),
                });
            }
        }
        Ok(Self { urls })
    }

    /// Parses a pool from a JSON array of strings.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoPoolError::Parse`] for malformed JSON and
    /// [`PhotoPoolError::InvalidUrl`] for unusable entries.
    pub fn from_json(json: &str) -> Result<Self, PhotoPoolError> {
        let urls: Vec<String> =
            serde_json::from_str(json).map_err(|e| PhotoPoolError::Parse {
                message: e.to_string(),
            })?;
        Self::new(urls)
    }

    /// Loads a pool from `file_name` inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoPoolError::Io`] if the file cannot be read, otherwise
    /// the errors of [`PhotoPool::from_json`].
    pub fn from_file(dir: &Dir, file_name: &Utf8Path) -> Result<Self, PhotoPoolError> {
        let contents = dir
            .read_to_string(file_name.as_std_path())
            .map_err(|e| PhotoPoolError::Io {
                path: file_name.to_path_buf(),
                message: e.to_string(),
            })?;
        Self::from_json(&contents)
    }

    /// Returns an empty pool, which seeds placeholder avatars only.
    #[must_use]
    pub const fn empty() -> Self {
        Self { urls: Vec::new() }
    }

    /// Returns the URLs in their stored order.
    #[must_use]
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Returns the number of URLs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Returns `true` when the pool holds no URLs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl Default for PhotoPool {
    fn default() -> Self {
        Self {
            urls: BUILT_IN_PHOTOS.iter().map(|url| (*url).to_owned()).collect(),
        }
    }
}

fn is_http_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn built_in_urls_are_valid() {
        let pool = PhotoPool::default();
        assert_eq!(PhotoPool::new(pool.urls().to_vec()), Ok(pool));
    }

    #[test]
    fn empty_array_is_accepted() {
        let pool = PhotoPool::from_json("[]").expect("empty pool");
        assert!(pool.is_empty());
        assert_eq!(pool, PhotoPool::empty());
    }

    #[rstest]
    #[case::malformed("not json")]
    #[case::object(r#"{"urls": []}"#)]
    #[case::numbers("[1, 2]")]
    fn rejects_json_with_parse_error(#[case] json: &str) {
        let result = PhotoPool::from_json(json);
        assert!(matches!(result, Err(PhotoPoolError::Parse { .. })));
    }

    #[rstest]
    #[case::relative(r#"["https://a.example/x.jpg", "/img/x.jpg"]"#, 1, "/img/x.jpg")]
    #[case::blank(r#"[""]"#, 0, "")]
    #[case::ftp(r#"["ftp://a.example/x.jpg"]"#, 0, "ftp://a.example/x.jpg")]
    fn rejects_non_http_urls(#[case] json: &str, #[case] index: usize, #[case] value: &str) {
        let result = PhotoPool::from_json(json);
        assert_eq!(
            result,
            Err(PhotoPoolError::InvalidUrl {
                index,
                value: value.to_owned(),
            })
        );
    }
}
