use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::config::ProbeConfig;
use crate::models::{ProbeResult, Severity, Verdict};

/// Turns one completed exchange into a verdict. Stages run in precedence
/// order (status code, JSON assertion, latency) and may only escalate the
/// running severity; latency is not judged once a functional failure has
/// already been recorded.
pub(crate) fn evaluate(config: &ProbeConfig, result: &ProbeResult) -> Verdict {
    let mut severity = Severity::Ok;
    let mut message = None;
    let mut additional = None;

    if let Some(escalated) = check_status(&config.expect, result.status) {
        severity = severity.escalate(escalated);
        message = Some(format!("Unexpected http status code: {}", result.status));
    }

    if let Some(assertion) = &config.json_assertion {
        additional = Some(pretty_json(&result.body));
        if !json_value_matches(&result.body, &assertion.key_path, &assertion.expected) {
            severity = severity.escalate(Severity::Critical);
            message = Some(format!(
                "`{}` is not `{}`",
                assertion.key_path, assertion.expected
            ));
        }
    }

    if severity == Severity::Ok {
        let elapsed = result.elapsed.as_secs_f64();
        if elapsed > config.crit {
            severity = severity.escalate(Severity::Critical);
            message = Some(format!(
                "response time {elapsed:.3}s exceeded critical threshold {:.3}s",
                config.crit
            ));
        } else if elapsed > config.warn {
            severity = severity.escalate(Severity::Warning);
            message = Some(format!(
                "response time {elapsed:.3}s exceeded warning threshold {:.3}s",
                config.warn
            ));
        }
    }

    Verdict {
        severity,
        message,
        additional,
    }
}

fn check_status(expect: &[String], status: u16) -> Option<Severity> {
    if expect.is_empty() {
        if status >= 500 {
            Some(Severity::Critical)
        } else if status >= 400 {
            Some(Severity::Warning)
        } else {
            None
        }
    } else if expect.iter().any(|code| code == &status.to_string()) {
        None
    } else {
        // a code outside the expect list is a soft failure: it warns
        // rather than going critical
        Some(Severity::Warning)
    }
}

/// Object-field lookup only; a segment applied to an array or scalar fails
/// the lookup. Array-index path syntax is deliberately not supported.
fn lookup<'a>(root: &'a Value, key_path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in key_path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Rendering rule for the comparison: strings compare as their unquoted
/// content, numbers and booleans as their JSON text, null as `null`.
/// Objects and arrays never match.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Object(_) | Value::Array(_) => None,
    }
}

fn json_value_matches(body: &[u8], key_path: &str, expected: &str) -> bool {
    let Ok(root) = serde_json::from_slice::<Value>(body) else {
        return false;
    };
    lookup(&root, key_path)
        .and_then(scalar_to_string)
        .is_some_and(|found| found == expected)
}

/// Fixed 4-space indent; falls back to the raw body text when the body is
/// not valid JSON so the operator still sees what came back.
fn pretty_json(body: &[u8]) -> String {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return String::from_utf8_lossy(body).into_owned();
    };
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    if value.serialize(&mut ser).is_err() {
        return String::from_utf8_lossy(body).into_owned();
    }
    String::from_utf8_lossy(&out).into_owned()
}
