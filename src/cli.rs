use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "check_http",
    version,
    about = "Single-shot HTTP(S) health-check probe (monitoring-plugin convention)"
)]
pub(crate) struct Cli {
    /// Dump the response body to stdout before the report
    #[arg(short = 'v', long)]
    pub(crate) verbose: bool,
    /// Virtual host; used as the target when --ipaddr is absent, sent as
    /// the Host header when both are given
    #[arg(short = 'H', long)]
    pub(crate) vhost: Option<String>,
    /// Target host or IP address
    #[arg(short = 'I', long)]
    pub(crate) ipaddr: Option<String>,
    /// TCP port (0 = 443 with --ssl, 80 without)
    #[arg(short = 'p', long, default_value_t = 0)]
    pub(crate) port: u16,
    /// Warning time in seconds
    #[arg(short = 'w', long, default_value_t = 5.0)]
    pub(crate) warn: f64,
    /// Critical time in seconds
    #[arg(short = 'c', long, default_value_t = 10.0)]
    pub(crate) crit: f64,
    /// Timeout in seconds for the whole exchange
    #[arg(short = 't', long, default_value_t = 10)]
    pub(crate) timeout: u64,
    /// URI path
    #[arg(short = 'u', long, default_value = "/")]
    pub(crate) uri: String,
    /// Enable TLS
    #[arg(short = 'S', long)]
    pub(crate) ssl: bool,
    /// Expected status codes (csv); empty = 4xx warns, 5xx goes critical
    #[arg(short = 'e', long, default_value = "")]
    pub(crate) expect: String,
    /// Dot-separated JSON key path to assert on (requires --json-value)
    #[arg(long)]
    pub(crate) json_key: Option<String>,
    /// Expected value for --json-key
    #[arg(long)]
    pub(crate) json_value: Option<String>,
    /// HTTP method (GET, HEAD, POST, ...)
    #[arg(short = 'j', long, default_value = "GET")]
    pub(crate) method: String,
    /// User-Agent header
    #[arg(short = 'A', long, default_value = "check_http")]
    pub(crate) useragent: String,
    /// Client certificate file (PEM, requires --private-key)
    #[arg(short = 'J', long)]
    pub(crate) client_cert: Option<PathBuf>,
    /// Private key file (PEM, requires --client-cert)
    #[arg(short = 'K', long)]
    pub(crate) private_key: Option<PathBuf>,
    /// Skip server certificate verification; on by default, pass
    /// `--insecure false` to verify the chain
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub(crate) insecure: bool,
}
