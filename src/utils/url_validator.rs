//! URL 验证模块
//!
//! 收藏的链接只接受 http/https，阻止危险协议

use url::Url;

/// URL 验证错误
#[derive(Debug)]
pub enum UrlValidationError {
    EmptyUrl,
    InvalidProtocol(String),
    DangerousProtocol(String),
    InvalidFormat(String),
    MissingHost,
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::InvalidProtocol(proto) => write!(
                f,
                "Invalid protocol: {}. Only http:// and https:// are allowed",
                proto
            ),
            Self::DangerousProtocol(proto) => {
                write!(f, "Dangerous protocol blocked: {}", proto)
            }
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
            Self::MissingHost => write!(f, "URL must contain a host"),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 危险协议列表
const DANGEROUS_PROTOCOLS: &[&str] = &[
    "javascript:",
    "data:",
    "file:",
    "vbscript:",
    "about:",
    "blob:",
];

/// Validate a bookmark URL and return it trimmed.
///
/// Rejects empty input, dangerous schemes, anything that is not http(s),
/// unparseable URLs and URLs without a host.
pub fn validate_url(url: &str) -> Result<String, UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let url_lower = url.to_lowercase();

    for proto in DANGEROUS_PROTOCOLS {
        if url_lower.starts_with(proto) {
            return Err(UrlValidationError::DangerousProtocol(proto.to_string()));
        }
    }

    if !url_lower.starts_with("http://") && !url_lower.starts_with("https://") {
        let proto = url_lower
            .split(':')
            .next()
            .map(|s| format!("{}:", s))
            .unwrap_or_default();
        return Err(UrlValidationError::InvalidProtocol(proto));
    }

    let parsed = Url::parse(url).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url.to_string())
}
