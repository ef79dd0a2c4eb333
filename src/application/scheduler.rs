use std::time::Duration;

/// A named task that fires every `interval` of accumulated frame time
#[derive(Clone, Debug)]
pub struct RecurringTask {
    pub name: &'static str,
    pub interval: Duration,
    pub enabled: bool,
    elapsed: Duration,
}

impl RecurringTask {
    pub fn new(name: &'static str, interval: Duration) -> Self {
        Self {
            name,
            interval,
            enabled: true,
            elapsed: Duration::ZERO,
        }
    }

    /// Accumulate `delta` and return how many times the task is due,
    /// at most `max_runs`. Backlog beyond the cap is dropped.
    pub fn advance(&mut self, delta: Duration, max_runs: u32) -> u32 {
        if !self.enabled || self.interval.is_zero() {
            return 0;
        }

        self.elapsed += delta;
        let mut runs = 0;
        while self.elapsed >= self.interval && runs < max_runs {
            self.elapsed -= self.interval;
            runs += 1;
        }

        if self.elapsed >= self.interval {
            log::debug!(
                "{} task behind by {:?}, dropping backlog",
                self.name,
                self.elapsed
            );
            self.elapsed = Duration::ZERO;
        }
        runs
    }
}

/// How many times each task fired during one `Scheduler::advance`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ticks {
    pub simulation: u32,
    pub ornament: u32,
}

/// Scheduler drives the two independent loops of the app:
/// the simulation/render tick and the ornament rotation tick.
#[derive(Clone, Debug)]
pub struct Scheduler {
    pub simulation: RecurringTask,
    pub ornament: RecurringTask,
    max_catch_up: u32,
}

impl Scheduler {
    pub fn new(sim_interval: Duration, ornament_interval: Duration, max_catch_up: u32) -> Self {
        Self {
            simulation: RecurringTask::new("simulation", sim_interval),
            ornament: RecurringTask::new("ornament", ornament_interval),
            max_catch_up: max_catch_up.max(1),
        }
    }

    /// Advance both tasks by one frame's worth of time
    pub fn advance(&mut self, delta: Duration) -> Ticks {
        Ticks {
            simulation: self.simulation.advance(delta, self.max_catch_up),
            ornament: self.ornament.advance(delta, self.max_catch_up),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_task_fires_on_interval() {
        let mut task = RecurringTask::new("t", ms(10));
        assert_eq!(task.advance(ms(9), 8), 0);
        assert_eq!(task.advance(ms(1), 8), 1);
        assert_eq!(task.elapsed, Duration::ZERO);
    }

    #[test]
    fn test_task_keeps_remainder() {
        let mut task = RecurringTask::new("t", ms(10));
        assert_eq!(task.advance(ms(16), 8), 1);
        assert_eq!(task.elapsed, ms(6));
        assert_eq!(task.advance(ms(16), 8), 2);
        assert_eq!(task.elapsed, ms(2));
    }

    #[test]
    fn test_task_caps_catch_up() {
        let mut task = RecurringTask::new("t", ms(10));
        assert_eq!(task.advance(ms(1000), 8), 8);
        assert_eq!(task.elapsed, Duration::ZERO);
    }

    #[test]
    fn test_disabled_task_never_fires() {
        let mut task = RecurringTask::new("t", ms(10));
        task.enabled = false;
        assert_eq!(task.advance(ms(100), 8), 0);
        assert_eq!(task.elapsed, Duration::ZERO);
    }

    #[test]
    fn test_tasks_are_independent() {
        let mut scheduler = Scheduler::new(ms(10), ms(100), 8);
        let mut total = Ticks::default();
        for _ in 0..10 {
            let ticks = scheduler.advance(ms(10));
            total.simulation += ticks.simulation;
            total.ornament += ticks.ornament;
        }
        assert_eq!(total, Ticks { simulation: 10, ornament: 1 });

        scheduler.simulation.enabled = false;
        let ticks = scheduler.advance(ms(100));
        assert_eq!(ticks, Ticks { simulation: 0, ornament: 1 });
    }
}
