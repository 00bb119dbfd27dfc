//! Storefront URL value.

/// A storefront URL under construction.
///
/// Built by a [`UrlBuilderRepository`](crate::contracts::UrlBuilderRepository),
/// extended with [`append`](Self::append) and rendered with
/// [`to_relative_url`](Self::to_relative_url).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopUrl {
    path: String,
    lang: String,
}

impl ShopUrl {
    /// Create a URL for `path` in language `lang`.
    #[must_use]
    pub fn new(path: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            lang: lang.into(),
        }
    }

    /// Append a raw suffix to the path.
    #[must_use]
    pub fn append(mut self, suffix: &str) -> Self {
        self.path.push_str(suffix);
        self
    }

    /// Render as a relative URL, prefixed with `/{lang}` when requested.
    #[must_use]
    pub fn to_relative_url(&self, include_language: bool) -> String {
        let path = if self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        };

        if include_language && !self.lang.is_empty() {
            if path == "/" {
                format!("/{}", self.lang)
            } else {
                format!("/{}{path}", self.lang)
            }
        } else {
            path
        }
    }
}
