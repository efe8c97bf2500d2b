use std::path::PathBuf;
use std::sync::Arc;

use staydel_domain::{
    ClockInfra, DirectoryReaderInfra, EnvironmentInfra, FileInfoInfra, FileReaderInfra,
    FileRemoverInfra, ReportSink, ScheduleConfig, SweepStats, WalkerInfra,
};
use tracing::debug;

use crate::sweep::SweepService;

/// Repeats whole sweeps at a randomized offset within fixed windows, so many
/// independent instances on the same schedule do not sweep in lockstep.
pub struct SweepScheduler<F> {
    infra: Arc<F>,
    config: ScheduleConfig,
}

impl<F> SweepScheduler<F> {
    pub fn new(infra: Arc<F>, config: ScheduleConfig) -> Self {
        Self { infra, config }
    }
}

impl<F> SweepScheduler<F>
where
    F: EnvironmentInfra
        + FileInfoInfra
        + FileReaderInfra
        + DirectoryReaderInfra
        + FileRemoverInfra
        + WalkerInfra
        + ClockInfra
        + ReportSink,
{
    /// Runs the configured rounds strictly in sequence.
    ///
    /// Each round sleeps a uniform random lead-in within the window, sweeps
    /// every configured path, then sleeps out the rest of the window so
    /// consecutive rounds are spaced exactly one period apart. The final
    /// round skips the complement sleep; zero repeats means a single
    /// immediate sweep.
    pub async fn run(&self, sweep: &SweepService<F>, paths: &[PathBuf]) -> SweepStats {
        if self.config.repeats == 0 {
            return sweep.sweep_paths(paths).await;
        }

        let mut total = SweepStats::default();
        for round in 0..self.config.repeats {
            let lead = self.infra.jitter(self.config.period);
            self.infra.progress(&format!(
                "Waiting {} before sweep round {} of {}",
                humantime::format_duration(lead),
                round + 1,
                self.config.repeats
            ));
            debug!(round = round + 1, lead = ?lead, "sleeping before sweep");
            self.infra.sleep(lead).await;

            total.absorb(sweep.sweep_paths(paths).await);

            if round + 1 < self.config.repeats {
                self.infra
                    .sleep(self.config.period.saturating_sub(lead))
                    .await;
            }
        }
        total
    }
}
