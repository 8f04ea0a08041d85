use std::fmt::Write as _;

use crate::entry::TrackerEntryReport;

pub trait Printer {
    fn println(&self, output: &str);
}

pub struct Console {}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl Printer for Console {
    fn println(&self, output: &str) {
        println!("{}", &output);
    }
}

/// It renders one tracker report as plain text, one line for the tracker
/// followed by its messages and one line per local endpoint.
#[must_use]
pub fn render_text(report: &TrackerEntryReport) -> String {
    let mut output = format!(
        "[{}] {} ({}) seeders: {} leechers: {} downloaded: {}\n",
        report.tier, report.url, report.status, report.seeders, report.leechers, report.downloaded
    );

    for message in &report.messages {
        let _ = writeln!(output, "    message: {message}");
    }

    for endpoint in &report.endpoints {
        let _ = write!(output, "    endpoint {} ({})", endpoint.name, endpoint.status);
        if !endpoint.message.is_empty() {
            let _ = write!(output, ": {}", endpoint.message);
        }
        output.push('\n');
    }

    output
}
