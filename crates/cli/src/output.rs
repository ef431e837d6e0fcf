use ferrous_doh_domain::{Answer, Record};
use std::fmt::Write;
use std::time::Duration;

/// Human-readable rendering of an answer for the `query` command.
pub fn render_answer(answer: &Answer, rtt: Duration) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Return Code: {} ({})", answer.status, answer.status.0);
    let _ = writeln!(out, "Truncated: {}", answer.truncated);
    let _ = writeln!(
        out,
        "Recursion Desired: {}, Recursion Available: {}",
        answer.recursion_desired, answer.recursion_available
    );
    let _ = writeln!(
        out,
        "DNSSEC Disabled: {}, DNSSEC Validated: {}",
        answer.dnssec_disabled, answer.dnssec_validated
    );

    render_section(&mut out, "Answer", &answer.answer);
    render_section(&mut out, "Authority", &answer.authority);
    render_section(&mut out, "Additional", &answer.additional);

    if !answer.comment.is_empty() {
        let _ = writeln!(out, "\nComment: {}", answer.comment);
    }

    let _ = writeln!(out, "\nQuery time: {}ms", rtt.as_millis());
    out
}

fn render_section(out: &mut String, title: &str, records: &[Record]) {
    if records.is_empty() {
        return;
    }

    let _ = writeln!(out, "\n{}:", title);
    for record in records {
        let _ = writeln!(
            out,
            "  {}\t{}\t{}\t{}",
            record.name, record.ttl, record.record_type, record.data
        );
    }
}
