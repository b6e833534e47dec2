use std::fs;
use std::path::Path;
use std::time::Instant;

use reqwest::header::HOST;
use reqwest::{Client, Identity, Version, redirect};

use crate::config::ProbeConfig;
use crate::errors::CheckError;
use crate::models::ProbeResult;

/// Performs the single timed exchange. The clock starts just before send
/// and stops once the body has been fully read, so the configured timeout
/// bounds the whole measurement.
pub(crate) async fn execute(config: &ProbeConfig) -> Result<ProbeResult, CheckError> {
    let client = build_client(config)?;

    let mut request = client.request(config.method.clone(), config.url.clone());
    if let Some(host) = &config.host_header {
        request = request.header(HOST, host);
    }

    let started = Instant::now();
    let response = request.send().await?;
    let status = response.status();
    let protocol = protocol_name(response.version());
    let body = response.bytes().await?.to_vec();
    let elapsed = started.elapsed();

    Ok(ProbeResult {
        status: status.as_u16(),
        status_line: status.to_string(),
        protocol,
        body,
        elapsed,
    })
}

/// Redirects are not followed: the response under test is the first one
/// the target returns.
fn build_client(config: &ProbeConfig) -> Result<Client, CheckError> {
    let mut builder = Client::builder()
        .use_rustls_tls()
        .user_agent(&config.user_agent)
        .timeout(config.timeout)
        .redirect(redirect::Policy::none())
        .danger_accept_invalid_certs(config.tls.insecure);

    if let Some((cert_path, key_path)) = &config.tls.identity {
        builder = builder.identity(load_identity(cert_path, key_path)?);
    }

    builder.build().map_err(CheckError::ClientBuild)
}

fn load_identity(cert_path: &Path, key_path: &Path) -> Result<Identity, CheckError> {
    let read = |path: &Path| {
        fs::read(path).map_err(|source| CheckError::IdentityFile {
            path: path.display().to_string(),
            source,
        })
    };
    // rustls takes the certificate chain and key as one PEM bundle
    let mut pem = read(cert_path)?;
    pem.push(b'\n');
    pem.extend(read(key_path)?);
    Identity::from_pem(&pem).map_err(CheckError::IdentityLoad)
}

fn protocol_name(version: Version) -> String {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2.0",
        Version::HTTP_3 => "HTTP/3.0",
        _ => "HTTP/?",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn config(args: &[&str]) -> ProbeConfig {
        let cli = Cli::parse_from(std::iter::once("check_http").chain(args.iter().copied()));
        ProbeConfig::from_cli(cli).unwrap()
    }

    #[test]
    fn client_builds_with_defaults() {
        assert!(build_client(&config(&["-I", "example.com"])).is_ok());
    }

    #[test]
    fn missing_identity_file_is_a_configuration_error() {
        let result = build_client(&config(&[
            "-I",
            "example.com",
            "-J",
            "/nonexistent/cert.pem",
            "-K",
            "/nonexistent/key.pem",
        ]));
        assert!(matches!(result, Err(CheckError::IdentityFile { .. })));
    }

    #[test]
    fn protocol_names() {
        assert_eq!(protocol_name(Version::HTTP_11), "HTTP/1.1");
        assert_eq!(protocol_name(Version::HTTP_2), "HTTP/2.0");
    }
}
