//! Progress reporting for long passes over a graph.

use std::time::{Duration, Instant};

/// Counts processed items and reports through the `log` facade at most
/// once per `log_interval`.
#[derive(Debug)]
pub struct ProgressLogger {
    item_name: String,
    log_interval: Duration,
    count: u64,
    expected: Option<u64>,
    started: Option<Instant>,
    last_log: Option<Instant>,
}

impl ProgressLogger {
    /// Default time between two reports.
    pub const DEFAULT_LOG_INTERVAL: Duration = Duration::from_secs(10);

    /// Create a logger counting `item_name`s.
    pub fn new(item_name: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
            log_interval: Self::DEFAULT_LOG_INTERVAL,
            count: 0,
            expected: None,
            started: None,
            last_log: None,
        }
    }

    /// Set the time between two reports.
    pub fn log_interval(mut self, interval: Duration) -> Self {
        self.log_interval = interval;
        self
    }

    /// Set the number of items the pass is expected to process.
    pub fn expected(mut self, expected: u64) -> Self {
        self.expected = Some(expected);
        self
    }

    /// Reset the count and start the clock.
    pub fn start(&mut self, message: &str) {
        let now = Instant::now();
        self.count = 0;
        self.started = Some(now);
        self.last_log = Some(now);
        log::info!("{message}");
    }

    /// Record one processed item.
    pub fn update(&mut self) {
        self.update_by(1);
    }

    /// Record `n` processed items.
    pub fn update_by(&mut self, n: u64) {
        self.count += n;
        let now = Instant::now();
        let due = self
            .last_log
            .map_or(true, |last| now.duration_since(last) >= self.log_interval);
        if due {
            self.last_log = Some(now);
            log::info!("{}", self.report());
        }
    }

    /// Finish the pass and log a summary.
    pub fn done(&mut self) {
        let elapsed = self.elapsed();
        log::info!(
            "Completed. {} {} in {:.3}s",
            self.count,
            self.item_name,
            elapsed.as_secs_f64()
        );
        self.started = None;
    }

    /// Items recorded since `start`.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Time since `start`, zero if not started.
    pub fn elapsed(&self) -> Duration {
        self.started.map(|s| s.elapsed()).unwrap_or_default()
    }

    fn report(&self) -> String {
        let secs = self.elapsed().as_secs_f64();
        let rate = if secs > 0.0 {
            self.count as f64 / secs
        } else {
            0.0
        };
        match self.expected {
            Some(total) if total > 0 => format!(
                "{}/{} {} ({:.1}%), {:.1} {}/s",
                self.count,
                total,
                self.item_name,
                100.0 * self.count as f64 / total as f64,
                rate,
                self.item_name
            ),
            _ => format!("{} {}, {:.1} {}/s", self.count, self.item_name, rate, self.item_name),
        }
    }
}
