use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use staydel_domain::ClockInfra;

pub struct StayDelClockService;

#[async_trait::async_trait]
impl ClockInfra for StayDelClockService {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn jitter(&self, upper: Duration) -> Duration {
        if upper.is_zero() {
            return Duration::ZERO;
        }
        let millis = rand::thread_rng().gen_range(0..upper.as_millis().max(1));
        Duration::from_millis(millis as u64)
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
