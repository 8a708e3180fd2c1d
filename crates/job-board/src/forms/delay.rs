use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

pub type DelayFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// Deferred completion between Submitting and Succeeded. Dropping the
/// returned future abandons the wait.
pub trait SubmissionDelay: Send + Sync {
    fn wait(&self) -> DelayFuture<'_>;
}

/// Simulated network latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerDelay {
    duration: Duration,
}

impl TimerDelay {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl SubmissionDelay for TimerDelay {
    fn wait(&self) -> DelayFuture<'_> {
        Box::pin(tokio::time::sleep(self.duration))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImmediateDelay;

impl SubmissionDelay for ImmediateDelay {
    fn wait(&self) -> DelayFuture<'_> {
        Box::pin(std::future::ready(()))
    }
}
