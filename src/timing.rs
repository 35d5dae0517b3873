//! Debounce and auto-repeat thresholds.
//!
//! All thresholds are counted in sample ticks, not wall-clock time. The
//! effective timing is the tick count multiplied by the tick period the
//! poller sleeps between samples.

/// Default number of consecutive active ticks before a press is accepted.
pub const DEFAULT_FILTER_TICKS: u16 = 100;

/// Default number of held ticks between the press and the first repeat.
pub const DEFAULT_INITIAL_REPEAT_DELAY_TICKS: u16 = 1000;

/// Default number of held ticks between subsequent repeats.
pub const DEFAULT_REPEAT_INTERVAL_TICKS: u16 = 200;

/// Default sampling period in microseconds (1 ms).
pub const DEFAULT_TICK_PERIOD_US: u32 = 1000;

/// Timing validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// Settle window shorter than two ticks.
    ///
    /// The tick that leaves `Released` already counts as the first sample,
    /// so a threshold of 0 or 1 would never be reached.
    FilterTooShort(u16),

    /// Zero ticks before the first repeat.
    ZeroRepeatDelay,

    /// Zero ticks between repeats.
    ZeroRepeatInterval,

    /// Zero-length sampling period.
    ZeroTickPeriod,
}

impl core::fmt::Display for TimingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimingError::FilterTooShort(ticks) => {
                write!(f, "filter window of {} ticks is too short (minimum 2)", ticks)
            }
            TimingError::ZeroRepeatDelay => {
                write!(f, "initial repeat delay must be at least one tick")
            }
            TimingError::ZeroRepeatInterval => {
                write!(f, "repeat interval must be at least one tick")
            }
            TimingError::ZeroTickPeriod => {
                write!(f, "tick period must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimingError {}

/// Debounce and repeat thresholds shared by every channel of a poller.
///
/// Built with a `const fn` so a deployment fixes its timing at compile time:
///
/// ```
/// use button_repeat::ButtonTiming;
///
/// const FAST: ButtonTiming = match ButtonTiming::new(20, 500, 100, 1000) {
///     Ok(timing) => timing,
///     Err(_) => panic!("invalid button timing"),
/// };
///
/// assert_eq!(FAST.filter_ticks(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonTiming {
    filter_ticks: u16,
    initial_repeat_delay_ticks: u16,
    repeat_interval_ticks: u16,
    tick_period_us: u32,
}

impl ButtonTiming {
    /// 100 tick settle window, first repeat after 1000 more, then every 200, at 1 ms per tick.
    pub const DEFAULT: Self = Self {
        filter_ticks: DEFAULT_FILTER_TICKS,
        initial_repeat_delay_ticks: DEFAULT_INITIAL_REPEAT_DELAY_TICKS,
        repeat_interval_ticks: DEFAULT_REPEAT_INTERVAL_TICKS,
        tick_period_us: DEFAULT_TICK_PERIOD_US,
    };

    /// Creates a validated timing configuration.
    ///
    /// # Errors
    /// * `FilterTooShort` - `filter_ticks` below 2
    /// * `ZeroRepeatDelay` - `initial_repeat_delay_ticks` is 0
    /// * `ZeroRepeatInterval` - `repeat_interval_ticks` is 0
    /// * `ZeroTickPeriod` - `tick_period_us` is 0
    pub const fn new(
        filter_ticks: u16,
        initial_repeat_delay_ticks: u16,
        repeat_interval_ticks: u16,
        tick_period_us: u32,
    ) -> Result<Self, TimingError> {
        if filter_ticks < 2 {
            return Err(TimingError::FilterTooShort(filter_ticks));
        }
        if initial_repeat_delay_ticks == 0 {
            return Err(TimingError::ZeroRepeatDelay);
        }
        if repeat_interval_ticks == 0 {
            return Err(TimingError::ZeroRepeatInterval);
        }
        if tick_period_us == 0 {
            return Err(TimingError::ZeroTickPeriod);
        }

        Ok(Self {
            filter_ticks,
            initial_repeat_delay_ticks,
            repeat_interval_ticks,
            tick_period_us,
        })
    }

    /// Consecutive active ticks needed to accept a press.
    #[inline]
    pub const fn filter_ticks(&self) -> u16 {
        self.filter_ticks
    }

    /// Held ticks between the press trigger and the first repeat.
    #[inline]
    pub const fn initial_repeat_delay_ticks(&self) -> u16 {
        self.initial_repeat_delay_ticks
    }

    /// Held ticks between consecutive repeats.
    #[inline]
    pub const fn repeat_interval_ticks(&self) -> u16 {
        self.repeat_interval_ticks
    }

    /// Sleep between two samples, in microseconds.
    #[inline]
    pub const fn tick_period_us(&self) -> u32 {
        self.tick_period_us
    }
}

impl Default for ButtonTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}
