//! Endpoint resolution from the `OLLAMA_HOST` environment variable.

use std::env;

use tracing::debug;
use url::Url;

/// Environment variable naming the server, as `[scheme://]host[:port]`.
pub const HOST_ENV_VAR: &str = "OLLAMA_HOST";

/// Fallback scheme when the configured address names none.
pub const DEFAULT_SCHEME: &str = "http";

/// Fallback host: the standard local Ollama server.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Fallback port: the standard local Ollama server port.
pub const DEFAULT_PORT: u16 = 11434;

/// Chat endpoint path appended to the resolved base.
const CHAT_PATH: &str = "/api/chat";

/// A partially specified network endpoint.
///
/// Each field is independently present or absent; absent fields fall back to
/// the documented defaults at composition time. Exists only transiently
/// during startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostAddress {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl HostAddress {
    /// Compose the fully qualified chat endpoint URL.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}://{}:{}{}",
            self.scheme.as_deref().unwrap_or(DEFAULT_SCHEME),
            self.host.as_deref().unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
            CHAT_PATH,
        )
    }
}

/// Resolve the server address from `OLLAMA_HOST`.
pub fn host_from_env() -> HostAddress {
    resolve_host(env::var(HOST_ENV_VAR).ok().as_deref())
}

/// Parse an optional address string into a [`HostAddress`].
///
/// Input without a scheme is parsed with an `http://` prefix, and a scheme
/// is reported only when the input actually named one. Unparseable input
/// resolves to an all-absent address, indistinguishable from "not
/// configured"; callers substitute defaults for whatever is missing.
pub fn resolve_host(raw: Option<&str>) -> HostAddress {
    let Some(raw) = raw else {
        return HostAddress::default();
    };
    if raw.is_empty() {
        return HostAddress::default();
    }

    // `Url::parse` reads schemeless "host:port" as scheme + opaque path, so
    // the prefix decision is made up front on the scheme marker.
    let has_scheme = raw.contains("://");
    let candidate = if has_scheme {
        raw.to_string()
    } else {
        format!("{DEFAULT_SCHEME}://{raw}")
    };

    let url = match Url::parse(&candidate) {
        Ok(url) => url,
        Err(err) => {
            debug!("Ignoring unparseable {HOST_ENV_VAR} value {raw:?}: {err}");
            return HostAddress::default();
        }
    };

    HostAddress {
        scheme: has_scheme.then(|| url.scheme().to_string()),
        host: url.host_str().map(str::to_string),
        port: url.port(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_resolve_identically() {
        assert_eq!(resolve_host(None), HostAddress::default());
        assert_eq!(resolve_host(Some("")), HostAddress::default());
        assert_eq!(resolve_host(None), resolve_host(Some("")));
    }

    #[test]
    fn test_host_and_port_without_scheme() {
        let addr = resolve_host(Some("example.com:9000"));
        assert_eq!(addr.scheme, None);
        assert_eq!(addr.host.as_deref(), Some("example.com"));
        assert_eq!(addr.port, Some(9000));
    }

    #[test]
    fn test_scheme_and_host_without_port() {
        let addr = resolve_host(Some("https://example.com"));
        assert_eq!(addr.scheme.as_deref(), Some("https"));
        assert_eq!(addr.host.as_deref(), Some("example.com"));
        assert_eq!(addr.port, None);
    }

    #[test]
    fn test_bare_host() {
        let addr = resolve_host(Some("ollama.local"));
        assert_eq!(addr.scheme, None);
        assert_eq!(addr.host.as_deref(), Some("ollama.local"));
        assert_eq!(addr.port, None);
    }

    #[test]
    fn test_full_address() {
        let addr = resolve_host(Some("https://gpu-box:8080"));
        assert_eq!(addr.scheme.as_deref(), Some("https"));
        assert_eq!(addr.host.as_deref(), Some("gpu-box"));
        assert_eq!(addr.port, Some(8080));
    }

    #[test]
    fn test_garbage_resolves_to_all_absent() {
        // Graceful fallback, not a crash and not an error.
        assert_eq!(resolve_host(Some("not a url at all!!")), HostAddress::default());
    }

    #[test]
    fn test_ipv4_host_with_port() {
        let addr = resolve_host(Some("0.0.0.0:11434"));
        assert_eq!(addr.scheme, None);
        assert_eq!(addr.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(addr.port, Some(11434));
    }

    #[test]
    fn test_default_composition() {
        assert_eq!(
            HostAddress::default().endpoint_url(),
            "http://127.0.0.1:11434/api/chat"
        );
    }

    #[test]
    fn test_composition_with_partial_fields() {
        let addr = resolve_host(Some("example.com:9000"));
        assert_eq!(addr.endpoint_url(), "http://example.com:9000/api/chat");

        let addr = resolve_host(Some("https://example.com"));
        assert_eq!(addr.endpoint_url(), "https://example.com:11434/api/chat");
    }

    #[test]
    fn test_garbage_composes_to_defaults() {
        let addr = resolve_host(Some("not a url at all!!"));
        assert_eq!(addr.endpoint_url(), "http://127.0.0.1:11434/api/chat");
    }

    #[test]
    fn test_host_from_env_reads_variable() {
        temp_env::with_var(HOST_ENV_VAR, Some("remote:9999"), || {
            let addr = host_from_env();
            assert_eq!(addr.host.as_deref(), Some("remote"));
            assert_eq!(addr.port, Some(9999));
        });
    }

    #[test]
    fn test_host_from_env_unset_gives_defaults() {
        temp_env::with_var_unset(HOST_ENV_VAR, || {
            assert_eq!(host_from_env(), HostAddress::default());
        });
    }
}
