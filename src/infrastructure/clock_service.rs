use std::time::Duration;

use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

use crate::{core::raw_msg::RawMsg, domain::clock::TimeUnit};

/// Cadence of each clock timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerIntervals {
    pub seconds: Duration,
    pub minutes: Duration,
    pub hours: Duration,
}

impl TimerIntervals {
    pub fn for_unit(&self, unit: TimeUnit) -> Duration {
        match unit {
            TimeUnit::Seconds => self.seconds,
            TimeUnit::Minutes => self.minutes,
            TimeUnit::Hours => self.hours,
        }
    }
}

impl Default for TimerIntervals {
    fn default() -> Self {
        Self {
            seconds: TimeUnit::Seconds.interval(),
            minutes: TimeUnit::Minutes.interval(),
            hours: TimeUnit::Hours.interval(),
        }
    }
}

/// The periodic timers of a mounted clock.
///
/// Each unit gets its own task that waits one interval, reports
/// `RawMsg::ClockTick(unit)` and repeats until cancelled. All tasks share one
/// cancellation token, so they stop together.
pub struct ClockTimers {
    cancel_token: CancellationToken,
    handles: Vec<(TimeUnit, JoinHandle<()>)>,
}

impl ClockTimers {
    /// Spawn one timer per unit. Must be called from within a tokio runtime.
    pub fn start(
        units: &[TimeUnit],
        intervals: TimerIntervals,
        raw_tx: mpsc::UnboundedSender<RawMsg>,
    ) -> Self {
        let cancel_token = CancellationToken::new();
        let handles = units
            .iter()
            .map(|unit| {
                let handle = spawn_timer(
                    *unit,
                    intervals.for_unit(*unit),
                    cancel_token.clone(),
                    raw_tx.clone(),
                );
                (*unit, handle)
            })
            .collect();

        log::info!("Clock timers started: {units:?}");
        Self {
            cancel_token,
            handles,
        }
    }

    pub fn is_running(&self) -> bool {
        !self.cancel_token.is_cancelled() && self.handles.iter().any(|(_, h)| !h.is_finished())
    }

    /// Stop every timer and wait for their tasks to finish
    pub async fn shutdown(&mut self) {
        self.cancel_token.cancel();
        for (unit, handle) in self.handles.drain(..) {
            if let Err(e) = handle.await {
                log::error!("Clock timer for {unit} ended abnormally: {e}");
            }
        }
        log::info!("Clock timers stopped");
    }
}

impl Drop for ClockTimers {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

fn spawn_timer(
    unit: TimeUnit,
    period: Duration,
    cancel_token: CancellationToken,
    raw_tx: mpsc::UnboundedSender<RawMsg>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        // First fire comes one full period after start
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    log::debug!("Clock timer for {unit} received cancellation signal");
                    break;
                }
                _ = interval.tick() => {
                    if raw_tx.send(RawMsg::ClockTick(unit)).is_err() {
                        log::warn!("Clock timer for {unit} lost its receiver");
                        break;
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn drain(rx: &mut mpsc::UnboundedReceiver<RawMsg>) -> Vec<TimeUnit> {
        let mut units = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            if let RawMsg::ClockTick(unit) = msg {
                units.push(unit);
            }
        }
        units
    }

    fn count(units: &[TimeUnit], unit: TimeUnit) -> usize {
        units.iter().filter(|u| **u == unit).count()
    }

    #[tokio::test(start_paused = true)]
    async fn test_timers_fire_at_their_cadence() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timers = ClockTimers::start(
            &[TimeUnit::Seconds, TimeUnit::Minutes, TimeUnit::Hours],
            TimerIntervals::default(),
            tx,
        );

        time::sleep(Duration::from_millis(60_500)).await;
        let fired = drain(&mut rx);

        assert_eq!(count(&fired, TimeUnit::Seconds), 60);
        assert_eq!(count(&fired, TimeUnit::Minutes), 1);
        assert_eq!(count(&fired, TimeUnit::Hours), 0);

        timers.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_immediate_fire() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timers = ClockTimers::start(&[TimeUnit::Seconds], TimerIntervals::default(), tx);

        time::sleep(Duration::from_millis(999)).await;
        assert!(drain(&mut rx).is_empty());

        timers.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_all_timers() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timers = ClockTimers::start(
            &[TimeUnit::Seconds, TimeUnit::Minutes, TimeUnit::Hours],
            TimerIntervals::default(),
            tx,
        );
        assert!(timers.is_running());

        time::sleep(Duration::from_millis(2_500)).await;
        timers.shutdown().await;
        assert!(!timers.is_running());
        let before = drain(&mut rx);
        assert_eq!(count(&before, TimeUnit::Seconds), 2);

        time::sleep(Duration::from_secs(7_200)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_timers() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timers = ClockTimers::start(&[TimeUnit::Seconds], TimerIntervals::default(), tx);
        drop(timers);

        time::sleep(Duration::from_secs(10)).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_intervals() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let intervals = TimerIntervals {
            seconds: Duration::from_millis(10),
            minutes: Duration::from_millis(100),
            hours: Duration::from_millis(1_000),
        };
        let mut timers = ClockTimers::start(
            &[TimeUnit::Seconds, TimeUnit::Minutes, TimeUnit::Hours],
            intervals,
            tx,
        );

        time::sleep(Duration::from_millis(1_005)).await;
        let fired = drain(&mut rx);
        assert_eq!(count(&fired, TimeUnit::Seconds), 100);
        assert_eq!(count(&fired, TimeUnit::Minutes), 10);
        assert_eq!(count(&fired, TimeUnit::Hours), 1);

        timers.shutdown().await;
    }

    #[test]
    fn test_default_intervals() {
        let intervals = TimerIntervals::default();
        assert_eq!(intervals.for_unit(TimeUnit::Seconds), Duration::from_secs(1));
        assert_eq!(intervals.for_unit(TimeUnit::Minutes), Duration::from_secs(60));
        assert_eq!(intervals.for_unit(TimeUnit::Hours), Duration::from_secs(3_600));
    }
}
