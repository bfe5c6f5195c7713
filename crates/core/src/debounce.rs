/// Trailing-edge debounce over an external millisecond clock.
///
/// Every [`call`](Debouncer::call) pushes the deadline out to `now + wait`.
/// The host arms a timer for `wait` after each call and asks
/// [`fire`](Debouncer::fire) when it expires; only the timer that outlives
/// every later call gets `true`.
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait_ms: f64,
    deadline: Option<f64>,
}

// Timers may fire marginally early relative to `performance.now()`.
const TIMER_SLACK_MS: f64 = 1.0;

impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms: wait_ms as f64,
            deadline: None,
        }
    }

    pub fn wait_ms(&self) -> u32 {
        self.wait_ms as u32
    }

    /// Records a call at `now` and returns the new deadline.
    pub fn call(&mut self, now: f64) -> f64 {
        let deadline = now + self.wait_ms;
        self.deadline = Some(deadline);
        deadline
    }

    /// Consumes the pending call if its deadline has passed.
    pub fn fire(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now + TIMER_SLACK_MS >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_collapses_to_one_fire() {
        let mut d = Debouncer::new(10);
        d.call(0.0);
        d.call(4.0);
        d.call(8.0);

        // Timers armed by the first two calls expire before the last deadline.
        assert!(!d.fire(10.0));
        assert!(!d.fire(14.0));
        assert!(d.fire(18.0));
        assert!(!d.fire(18.0));
        assert!(!d.is_pending());
    }

    #[test]
    fn isolated_calls_each_fire() {
        let mut d = Debouncer::new(10);
        assert_eq!(d.call(0.0), 10.0);
        assert!(d.fire(10.0));
        d.call(50.0);
        assert!(d.is_pending());
        assert!(d.fire(60.5));
    }

    #[test]
    fn early_timer_within_slack_still_fires() {
        let mut d = Debouncer::new(10);
        d.call(100.0);
        assert!(d.fire(109.4));
    }
}
