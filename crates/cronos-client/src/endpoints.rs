//! Endpoint URLs of the analysis service
//!
//! All three endpoints hang off one base URL: the page origin in the browser,
//! or the configured server address natively.

use cronos_core::prelude::*;
use cronos_core::ReportId;
use url::Url;

/// Default server address used when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Export format of a stored report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    /// Structured-data export (`/report/json/{id}`)
    Json,
    /// Printable export (`/report/pdf/{id}`)
    Pdf,
}

impl ReportFormat {
    pub fn path_segment(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Pdf => "pdf",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportFormat::Json => "JSON",
            ReportFormat::Pdf => "PDF",
        }
    }
}

/// Validated base URL of the analysis service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase {
    url: Url,
}

impl ApiBase {
    /// Parse and validate a base URL
    ///
    /// Only `http`/`https` URLs that can carry a path are accepted. Any query
    /// or fragment is dropped.
    pub fn parse(base: &str) -> Result<Self> {
        let mut url = Url::parse(base.trim()).map_err(|_| Error::invalid_url(base))?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(Error::invalid_url(base));
        }
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self { url })
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// `POST {base}/analyze`
    pub fn analyze_url(&self) -> Result<Url> {
        self.join(&["analyze"])
    }

    /// `GET {base}/report/{format}/{id}`
    ///
    /// The id is percent-encoded as a single path segment.
    pub fn report_url(&self, format: ReportFormat, id: &ReportId) -> Result<Url> {
        self.join(&["report", format.path_segment(), id.as_str()])
    }

    fn join(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::invalid_url(self.url.as_str()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
        }
    }
}

impl std::fmt::Display for ApiBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ReportId {
        ReportId::new(s).unwrap()
    }

    #[test]
    fn test_analyze_url_from_origin() {
        let base = ApiBase::parse("http://localhost:8000").unwrap();
        assert_eq!(
            base.analyze_url().unwrap().as_str(),
            "http://localhost:8000/analyze"
        );
    }

    #[test]
    fn test_trailing_slash_is_not_doubled() {
        let base = ApiBase::parse("https://cronos.example.com/").unwrap();
        assert_eq!(
            base.analyze_url().unwrap().as_str(),
            "https://cronos.example.com/analyze"
        );
    }

    #[test]
    fn test_base_with_path_prefix() {
        let base = ApiBase::parse("https://example.com/cronos/").unwrap();
        assert_eq!(
            base.report_url(ReportFormat::Pdf, &id("abc")).unwrap().as_str(),
            "https://example.com/cronos/report/pdf/abc"
        );
    }

    #[test]
    fn test_report_urls() {
        let base = ApiBase::parse("http://127.0.0.1:8000").unwrap();
        let report = id("3f2b-9c");
        assert_eq!(
            base.report_url(ReportFormat::Json, &report)
                .unwrap()
                .as_str(),
            "http://127.0.0.1:8000/report/json/3f2b-9c"
        );
        assert_eq!(
            base.report_url(ReportFormat::Pdf, &report).unwrap().as_str(),
            "http://127.0.0.1:8000/report/pdf/3f2b-9c"
        );
    }

    #[test]
    fn test_report_id_is_encoded_as_one_segment() {
        let base = ApiBase::parse("http://127.0.0.1:8000").unwrap();
        let url = base
            .report_url(ReportFormat::Json, &id("../admin?x=1"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/report/json/..%2Fadmin%3Fx=1"
        );
    }

    #[test]
    fn test_query_and_fragment_dropped() {
        let base = ApiBase::parse("http://localhost:8000/?debug=1#top").unwrap();
        assert_eq!(base.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_rejects_non_http_urls() {
        assert!(ApiBase::parse("ftp://example.com").is_err());
        assert!(ApiBase::parse("mailto:someone@example.com").is_err());
        assert!(ApiBase::parse("not a url").is_err());
    }

    #[test]
    fn test_default_base() {
        assert_eq!(ApiBase::default().as_str(), "http://127.0.0.1:8000/");
    }
}
