//! Friendly names, roots, and bases of URLs.
//!
//! The root is scheme, host, and port; the base adds the path.  User info,
//! query, and fragment never appear in either.  A port equal to the
//! scheme's default is omitted.

use url::Url;

/// URL helpers.
pub trait UriExt {
    /// The host without a leading `www.`, or `None` for a URL with no host.
    fn as_friendly_name(&self) -> Option<&str>;

    /// `scheme://host[:port]`, or `scheme:` for a URL with no host.
    fn root(&self) -> String;

    /// The root followed by the path.
    fn base(&self) -> String;
}

impl UriExt for Url {
    fn as_friendly_name(&self) -> Option<&str> {
        let host = self.host_str()?;
        Some(host.strip_prefix("www.").unwrap_or(host))
    }

    fn root(&self) -> String {
        match (self.host_str(), self.port()) {
            (Some(host), Some(port)) => format!("{}://{host}:{port}", self.scheme()),
            (Some(host), None) => format!("{}://{host}", self.scheme()),
            (None, _) => format!("{}:", self.scheme()),
        }
    }

    fn base(&self) -> String {
        let mut base = self.root();
        base.push_str(self.path());
        base
    }
}
