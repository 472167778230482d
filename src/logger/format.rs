//! Access log format module
//!
//! `logging.access_log_format` selects a layout:
//! - `combined` (Apache/Nginx combined format)
//! - `common` (Common Log Format - CLF)
//! - `json` (one JSON object per line)
//! - anything else is a pattern with `$variables`, e.g.
//!   `$remote_addr $request_method $request_uri $status $request_time`
//!
//! The named layouts are themselves patterns, so every layout goes through
//! the same variable table.

use chrono::Local;
use std::borrow::Cow;

/// `$remote_addr - $user [$time_local] "$request" $status $body_bytes_sent`
const COMMON_PATTERN: &str =
    r#"$remote_addr - $http_x_user_id [$time_local] "$request" $status $body_bytes_sent"#;

const COMBINED_PATTERN: &str = concat!(
    r#"$remote_addr - $http_x_user_id [$time_local] "$request" $status $body_bytes_sent"#,
    r#" "$http_referer" "$http_user_agent""#
);

const CLF_TIME: &str = "%d/%b/%Y:%H:%M:%S %z";

/// One served request, as written to the access log
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    pub time: chrono::DateTime<Local>,
    pub method: String,
    /// Request path as received, prefix included
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// HTTP version (1.0, 1.1, 2.0)
    pub http_version: String,
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    /// `X-User-ID` header, as sent by the frontend
    pub user_id: Option<String>,
    /// Time from request start to response, in microseconds
    pub request_time_us: u64,
}

impl AccessLogEntry {
    /// Entry stamped with the current time; the caller fills in the rest
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
            referer: None,
            user_agent: None,
            user_id: None,
            request_time_us: 0,
        }
    }

    pub fn format(&self, format: &str) -> String {
        match format {
            "combined" => self.render(COMBINED_PATTERN),
            "common" => self.render(COMMON_PATTERN),
            "json" => self.to_json(),
            pattern => self.render(pattern),
        }
    }

    fn to_json(&self) -> String {
        serde_json::json!({
            "remote_addr": self.remote_addr,
            "time": self.time.to_rfc3339(),
            "method": self.method,
            "path": self.path,
            "query": self.query,
            "http_version": self.http_version,
            "status": self.status,
            "body_bytes": self.body_bytes,
            "referer": self.referer,
            "user_agent": self.user_agent,
            "user_id": self.user_id,
            "request_time_us": self.request_time_us,
        })
        .to_string()
    }

    /// Expand `$name` variables in a single left-to-right pass
    ///
    /// Names are the longest run of `[a-z0-9_]` after `$`; unknown names are
    /// copied through unchanged.
    fn render(&self, pattern: &str) -> String {
        let mut out = String::with_capacity(pattern.len() + 64);
        let mut rest = pattern;

        while let Some(dollar) = rest.find('$') {
            out.push_str(&rest[..dollar]);
            let after = &rest[dollar + 1..];
            let name_len = after
                .find(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'))
                .unwrap_or(after.len());
            let name = &after[..name_len];

            match self.variable(name) {
                Some(value) => out.push_str(&value),
                None => {
                    out.push('$');
                    out.push_str(name);
                }
            }
            rest = &after[name_len..];
        }
        out.push_str(rest);
        out
    }

    /// Supported variables:
    /// - `$remote_addr` - Client IP address
    /// - `$time_local` - Local time in Common Log Format
    /// - `$time_iso8601` - ISO 8601 timestamp
    /// - `$request` - Full request line ("METHOD /path HTTP/version")
    /// - `$request_method` - HTTP method
    /// - `$request_uri` - Request URI with query string
    /// - `$request_time` - Processing time in seconds (3 decimal places)
    /// - `$status` - Response status code
    /// - `$body_bytes_sent` - Response body size
    /// - `$http_referer` - Referer header
    /// - `$http_user_agent` - User-Agent header
    /// - `$http_x_user_id` - X-User-ID header
    fn variable(&self, name: &str) -> Option<Cow<'_, str>> {
        let value = match name {
            "remote_addr" => Cow::Borrowed(self.remote_addr.as_str()),
            "time_local" => Cow::Owned(self.time.format(CLF_TIME).to_string()),
            "time_iso8601" => Cow::Owned(self.time.to_rfc3339()),
            "request" => Cow::Owned(format!(
                "{} {} HTTP/{}",
                self.method,
                self.request_uri(),
                self.http_version
            )),
            "request_method" => Cow::Borrowed(self.method.as_str()),
            "request_uri" => self.request_uri(),
            "request_time" => {
                #[allow(clippy::cast_precision_loss)]
                let seconds = self.request_time_us as f64 / 1_000_000.0;
                Cow::Owned(format!("{seconds:.3}"))
            }
            "status" => Cow::Owned(self.status.to_string()),
            "body_bytes_sent" => Cow::Owned(self.body_bytes.to_string()),
            "http_referer" => dash_if_missing(self.referer.as_deref()),
            "http_user_agent" => dash_if_missing(self.user_agent.as_deref()),
            "http_x_user_id" => dash_if_missing(self.user_id.as_deref()),
            _ => return None,
        };
        Some(value)
    }

    fn request_uri(&self) -> Cow<'_, str> {
        match &self.query {
            Some(q) => Cow::Owned(format!("{}?{q}", self.path)),
            None => Cow::Borrowed(self.path.as_str()),
        }
    }
}

fn dash_if_missing(value: Option<&str>) -> Cow<'_, str> {
    Cow::Borrowed(value.unwrap_or("-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "192.168.1.1".to_string(),
            "GET".to_string(),
            "/api/lessons".to_string(),
        );
        entry.query = Some("page=1".to_string());
        entry.status = 200;
        entry.body_bytes = 1234;
        entry.referer = Some("https://example.com".to_string());
        entry.user_agent = Some("Mozilla/5.0".to_string());
        entry.user_id = Some("user-42".to_string());
        entry.request_time_us = 1_250_000;
        entry
    }

    #[test]
    fn test_format_combined() {
        let log = create_test_entry().format("combined");
        assert!(log.starts_with("192.168.1.1 - user-42 ["));
        assert!(log.contains("\"GET /api/lessons?page=1 HTTP/1.1\" 200 1234"));
        assert!(log.ends_with("\"https://example.com\" \"Mozilla/5.0\""));
    }

    #[test]
    fn test_format_common() {
        let log = create_test_entry().format("common");
        assert!(log.ends_with("200 1234"));
        assert!(!log.contains("Mozilla"));

        let mut entry = create_test_entry();
        entry.user_id = None;
        assert!(entry.format("common").starts_with("192.168.1.1 - - ["));
    }

    #[test]
    fn test_format_json() {
        let log = create_test_entry().format("json");
        let value: serde_json::Value = serde_json::from_str(&log).unwrap();
        assert_eq!(value["remote_addr"], "192.168.1.1");
        assert_eq!(value["status"], 200);
        assert_eq!(value["body_bytes"], 1234);
        assert_eq!(value["user_id"], "user-42");
        assert_eq!(value["query"], "page=1");
    }

    #[test]
    fn test_format_pattern() {
        let log = create_test_entry()
            .format("$remote_addr $request_method $status $request_time $http_x_user_id");
        assert_eq!(log, "192.168.1.1 GET 200 1.250 user-42");
    }

    #[test]
    fn test_pattern_edges() {
        let entry = create_test_entry();
        // longest name wins, punctuation ends a name
        assert_eq!(entry.format("[$request_uri],$status;"), "[/api/lessons?page=1],200;");
        // unknown names and a bare trailing `$` pass through
        assert_eq!(entry.format("$nope $ $"), "$nope $ $");
        assert_eq!(entry.format("no variables"), "no variables");
    }
}
