use std::fmt::Display;

use crate::models::{ProbeResult, Severity, Verdict};

/// One summary line with perfdata, then the message and additional output
/// blocks when present. The caller prints this verbatim and exits with the
/// verdict's severity.
pub(crate) fn render(verdict: &Verdict, result: &ProbeResult) -> String {
    let elapsed = result.elapsed.as_secs_f64();
    let size = result.body.len();
    let mut out = format!(
        "HTTP {}: {} {} - {} bytes in {:.3} second response time |time={:.6}s;;; size={}B;;;0",
        verdict.severity, result.protocol, result.status_line, size, elapsed, elapsed, size
    );
    if let Some(message) = verdict.message.as_deref().filter(|m| !m.is_empty()) {
        out.push('\n');
        out.push_str(message);
    }
    if let Some(additional) = verdict.additional.as_deref().filter(|a| !a.is_empty()) {
        out.push_str("\n\n");
        out.push_str(additional);
    }
    out
}

/// Short form for failures that never produced a response to summarize:
/// `HTTP UNKNOWN - ...` before any I/O, `HTTP CRITICAL - ...` on the wire.
pub(crate) fn render_failure(severity: Severity, error: &dyn Display) -> String {
    format!("HTTP {severity} - {error}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn result(size: usize, elapsed_ms: u64) -> ProbeResult {
        ProbeResult {
            status: 200,
            status_line: "200 OK".to_string(),
            protocol: "HTTP/1.1".to_string(),
            body: vec![b'x'; size],
            elapsed: Duration::from_millis(elapsed_ms),
        }
    }

    fn verdict(severity: Severity) -> Verdict {
        Verdict {
            severity,
            message: None,
            additional: None,
        }
    }

    #[test]
    fn summary_line_with_perfdata() {
        let out = render(&verdict(Severity::Ok), &result(1234, 123));
        assert_eq!(
            out,
            "HTTP OK: HTTP/1.1 200 OK - 1234 bytes in 0.123 second response time \
             |time=0.123000s;;; size=1234B;;;0"
        );
    }

    #[test]
    fn message_goes_on_its_own_line() {
        let mut v = verdict(Severity::Warning);
        v.message = Some("Unexpected http status code: 404".to_string());
        let out = render(&v, &result(0, 100));
        let mut lines = out.lines();
        assert!(lines.next().unwrap().starts_with("HTTP WARNING: "));
        assert_eq!(lines.next(), Some("Unexpected http status code: 404"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn additional_output_is_separated_by_a_blank_line() {
        let mut v = verdict(Severity::Critical);
        v.message = Some("`a.b` is not `bad`".to_string());
        v.additional = Some("{\n    \"a\": 1\n}".to_string());
        let out = render(&v, &result(0, 100));
        assert!(out.contains("`a.b` is not `bad`\n\n{\n    \"a\": 1\n}"));
    }

    #[test]
    fn failure_lines() {
        assert_eq!(
            render_failure(Severity::Unknown, &"target host is required"),
            "HTTP UNKNOWN - target host is required"
        );
        assert_eq!(
            render_failure(Severity::Critical, &"connection refused"),
            "HTTP CRITICAL - connection refused"
        );
    }
}
