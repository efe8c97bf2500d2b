use staydel_domain::ReportSink;
use tracing::debug;

/// Console-backed report sinks: progress to stdout, errors to stderr.
///
/// Both streams are mirrored into the trace log at debug level; the console
/// already carries them, so the log only repeats them when asked to.
#[derive(Default)]
pub struct ConsoleReportService;

impl ReportSink for ConsoleReportService {
    fn progress(&self, line: &str) {
        println!("{line}");
        debug!("{line}");
    }

    fn error(&self, line: &str) {
        eprintln!("{line}");
        debug!(kind = "error", "{line}");
    }
}
