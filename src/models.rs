use std::fmt;
use std::time::Duration;

/// Monitoring-plugin severity. The numeric value is the process exit code.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Severity {
    Ok = 0,
    Warning = 1,
    Critical = 2,
    Unknown = 3,
}

impl Severity {
    pub(crate) fn exit_code(self) -> u8 {
        self as u8
    }

    /// Raises the running severity, never lowers it. `Unknown` is reserved
    /// for pre-flight failures and is not part of the escalation order; it
    /// is sticky on either side.
    pub(crate) fn escalate(self, to: Severity) -> Severity {
        match (self, to) {
            (Severity::Unknown, _) | (_, Severity::Unknown) => Severity::Unknown,
            _ if (to as u8) > (self as u8) => to,
            _ => self,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// Everything the evaluator needs from one completed exchange.
#[derive(Debug, Clone)]
pub(crate) struct ProbeResult {
    pub(crate) status: u16,
    /// Status line as reported, e.g. "200 OK".
    pub(crate) status_line: String,
    /// Protocol name, e.g. "HTTP/1.1".
    pub(crate) protocol: String,
    pub(crate) body: Vec<u8>,
    /// Wall-clock time from just before send until the body was fully read.
    pub(crate) elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Verdict {
    pub(crate) severity: Severity,
    pub(crate) message: Option<String>,
    /// Secondary text block printed after a blank line (pretty-printed
    /// JSON body when a JSON assertion was configured).
    pub(crate) additional: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escalate_only_raises() {
        assert_eq!(Severity::Ok.escalate(Severity::Warning), Severity::Warning);
        assert_eq!(
            Severity::Warning.escalate(Severity::Critical),
            Severity::Critical
        );
        assert_eq!(
            Severity::Critical.escalate(Severity::Warning),
            Severity::Critical
        );
        assert_eq!(Severity::Warning.escalate(Severity::Ok), Severity::Warning);
        assert_eq!(Severity::Ok.escalate(Severity::Ok), Severity::Ok);
    }

    #[test]
    fn unknown_is_sticky() {
        assert_eq!(Severity::Unknown.escalate(Severity::Ok), Severity::Unknown);
        assert_eq!(
            Severity::Critical.escalate(Severity::Unknown),
            Severity::Unknown
        );
    }

    #[test]
    fn exit_codes_match_the_plugin_convention() {
        assert_eq!(Severity::Ok.exit_code(), 0);
        assert_eq!(Severity::Warning.exit_code(), 1);
        assert_eq!(Severity::Critical.exit_code(), 2);
        assert_eq!(Severity::Unknown.exit_code(), 3);
    }

    #[test]
    fn severity_names() {
        assert_eq!(Severity::Ok.to_string(), "OK");
        assert_eq!(Severity::Unknown.to_string(), "UNKNOWN");
    }
}
