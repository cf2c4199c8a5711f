/*
[INPUT]:  Login flow progress and probe outcome
[OUTPUT]: Human-readable report on stdout
[POS]:    Presentation layer - console output
[UPDATE]: When report wording or layout changes
*/

use console::style;
use wallet_login_adapter::ProbeOutcome;

pub fn header(title: &str) {
    println!("{}", style(format!("--- {title} ---")).bold().cyan());
}

/// Numbered stage line, e.g. `2. Requesting nonce`
pub fn step(number: u8, text: &str) {
    println!("{} {}", style(format!("{number}.")).bold(), text);
}

pub fn detail(label: &str, value: impl std::fmt::Display) {
    println!("   {}: {}", style(label).dim(), value);
}

pub fn failure(message: impl std::fmt::Display) {
    println!("   {} {}", style("error:").red().bold(), message);
}

pub fn outcome(outcome: &ProbeOutcome) {
    detail("HTTP status", outcome.status);
    detail("Response", format!("{}...", outcome.body_preview));
    println!("   {}", verdict(outcome));
}

/// One-line verdict for the probe result
pub fn verdict(outcome: &ProbeOutcome) -> String {
    if outcome.accepted {
        style("✅ SUCCESS: token accepted").green().bold().to_string()
    } else {
        style(format!("❌ REJECTED: token not accepted (HTTP {})", outcome.status))
            .red()
            .bold()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_text() {
        console::set_colors_enabled(false);
        let accepted = ProbeOutcome {
            status: 200,
            body_preview: "[]".to_string(),
            accepted: true,
        };
        let rejected = ProbeOutcome {
            status: 401,
            body_preview: String::new(),
            accepted: false,
        };
        assert!(verdict(&accepted).contains("token accepted"));
        assert!(verdict(&rejected).contains("HTTP 401"));
    }
}
