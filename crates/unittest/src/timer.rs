use core::time::Duration;

/// A monotonic clock used to measure elapsed times.
pub trait Timer {
    /// Return the time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

/// A `Timer` backed by `std::time::Instant`.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdTimer {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdTimer {
    /// Create a timer whose origin is the current instant.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Timer for StdTimer {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
