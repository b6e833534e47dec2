use thiserror::Error;

use crate::models::Severity;

/// Failures outside the evaluation pipeline. The variant class decides the
/// exit code: everything detected before network I/O is a configuration
/// problem (UNKNOWN), anything that happens on the wire is CRITICAL.
#[derive(Debug, Error)]
pub(crate) enum CheckError {
    #[error("target host is required (use --ipaddr or --vhost)")]
    MissingHost,
    #[error("--json-key and --json-value must be given together")]
    PartialJsonAssertion,
    #[error("--client-cert and --private-key must be given together")]
    PartialClientIdentity,
    #[error("invalid target url `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid http method `{0}`")]
    InvalidMethod(String),
    #[error("failed to read `{path}`: {source}")]
    IdentityFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to load client identity: {0}")]
    IdentityLoad(#[source] reqwest::Error),
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl CheckError {
    pub(crate) fn severity(&self) -> Severity {
        match self {
            CheckError::Transport(_) => Severity::Critical,
            _ => Severity::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_map_to_unknown() {
        assert_eq!(CheckError::MissingHost.severity(), Severity::Unknown);
        assert_eq!(
            CheckError::PartialJsonAssertion.severity(),
            Severity::Unknown
        );
        assert_eq!(
            CheckError::InvalidMethod("G E T".into()).severity(),
            Severity::Unknown
        );
    }
}
