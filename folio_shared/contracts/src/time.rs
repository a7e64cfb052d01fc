use chrono::{DateTime, Utc};

/// Clock seam, so worksheet timestamps and token expiries can be pinned in
/// tests.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TimeService: Send + Sync + 'static {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

#[cfg(feature = "mock")]
impl MockTimeService {
    /// Expects exactly one `now` call, answered with the given instant.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.expect_now().once().return_const(now);
        self
    }
}
