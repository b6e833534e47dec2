use std::path::PathBuf;
use std::time::Duration;

use reqwest::Method;
use url::Url;

use crate::cli::Cli;
use crate::errors::CheckError;

#[derive(Debug, Clone)]
pub(crate) struct JsonAssertion {
    pub(crate) key_path: String,
    pub(crate) expected: String,
}

#[derive(Debug, Clone)]
pub(crate) struct TlsOptions {
    /// Server certificate verification is skipped by default; the original
    /// tool never verified and monitoring targets are routinely self-signed.
    pub(crate) insecure: bool,
    /// Client certificate and private key files (PEM) for mutual TLS.
    pub(crate) identity: Option<(PathBuf, PathBuf)>,
}

/// Immutable probe configuration, validated once before any network I/O.
#[derive(Debug, Clone)]
pub(crate) struct ProbeConfig {
    pub(crate) url: Url,
    pub(crate) method: Method,
    pub(crate) user_agent: String,
    /// Host header override when --vhost and --ipaddr are both given.
    pub(crate) host_header: Option<String>,
    pub(crate) timeout: Duration,
    pub(crate) tls: TlsOptions,
    /// Acceptable status codes in string form; empty means the 4xx/5xx
    /// range rule applies instead.
    pub(crate) expect: Vec<String>,
    pub(crate) json_assertion: Option<JsonAssertion>,
    pub(crate) warn: f64,
    pub(crate) crit: f64,
    pub(crate) verbose: bool,
}

impl ProbeConfig {
    pub(crate) fn from_cli(cli: Cli) -> Result<Self, CheckError> {
        let ipaddr = cli.ipaddr.filter(|h| !h.is_empty());
        let vhost = cli.vhost.filter(|h| !h.is_empty());

        let host = ipaddr
            .clone()
            .or_else(|| vhost.clone())
            .ok_or(CheckError::MissingHost)?;
        let host_header = match (&ipaddr, &vhost) {
            (Some(_), Some(v)) => Some(v.clone()),
            _ => None,
        };

        let (scheme, default_port) = if cli.ssl { ("https", 443) } else { ("http", 80) };
        let port = if cli.port == 0 { default_port } else { cli.port };
        let raw = format!("{scheme}://{host}:{port}{}", cli.uri);
        let url = Url::parse(&raw).map_err(|source| CheckError::InvalidUrl { url: raw, source })?;

        let method = Method::from_bytes(cli.method.to_uppercase().as_bytes())
            .map_err(|_| CheckError::InvalidMethod(cli.method.clone()))?;

        let json_key = cli.json_key.filter(|k| !k.is_empty());
        let json_value = cli.json_value.filter(|v| !v.is_empty());
        let json_assertion = match (json_key, json_value) {
            (Some(key_path), Some(expected)) => Some(JsonAssertion { key_path, expected }),
            (None, None) => None,
            _ => return Err(CheckError::PartialJsonAssertion),
        };

        let identity = match (cli.client_cert, cli.private_key) {
            (Some(cert), Some(key)) => Some((cert, key)),
            (None, None) => None,
            _ => return Err(CheckError::PartialClientIdentity),
        };

        let expect = if cli.expect.is_empty() {
            Vec::new()
        } else {
            cli.expect
                .split(',')
                .map(|code| code.trim().to_string())
                .collect()
        };

        Ok(ProbeConfig {
            url,
            method,
            user_agent: cli.useragent,
            host_header,
            timeout: Duration::from_secs(cli.timeout),
            tls: TlsOptions {
                insecure: cli.insecure,
                identity,
            },
            expect,
            json_assertion,
            warn: cli.warn,
            crit: cli.crit,
            verbose: cli.verbose,
        })
    }
}
