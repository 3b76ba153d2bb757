//! Periodic toggling of one digital output.
//!
//! A [`Blinker`] owns a pin, configures it as an output once, and then
//! alternates it between [`Level::High`] and [`Level::Low`], blocking for
//! the configured interval between transitions:
//!
//! ```text
//! Unconfigured --start--> High --delay--> Low --delay--> High --> ...
//! ```
//!
//! ``` rust,ignore
//! const CONFIG: BlinkConfig<IoPin> = BlinkConfig::from_millis(pico::LED, 500);
//!
//! #[tinyblink::main]
//! fn main(hw: Hardware) -> ! {
//!     Blinker::new(CONFIG).run(hw.delay)
//! }
//! ```

use crate::Level;

/// Interval used by the bundled blink programs.
pub const DEFAULT_INTERVAL_MS: u32 = 500;

/// A pin that can be switched into push-pull output mode and driven.
pub trait OutputPin {
    /// Put the pin under software control as an output.
    fn configure_output(&mut self);

    fn set_level(&mut self, level: Level);
}

impl<P: OutputPin + ?Sized> OutputPin for &mut P {
    #[inline]
    fn configure_output(&mut self) {
        (**self).configure_output()
    }

    #[inline]
    fn set_level(&mut self, level: Level) {
        (**self).set_level(level)
    }
}

/// Blocking delay.
pub trait Delay {
    /// Block for at least `us` microseconds.
    fn delay_us(&mut self, us: u32);
}

impl<D: Delay + ?Sized> Delay for &mut D {
    #[inline]
    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us)
    }
}

/// Which pin to blink, and how long each phase lasts.
///
/// Only the constructors can build one, so the interval is never zero:
///
/// ``` rust,compile_fail
/// let config = tinyblink::BlinkConfig { pin: (), interval_us: 0 };
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlinkConfig<P> {
    pin: P,
    // Duration of both the high and the low phase.
    interval_us: u32,
}

impl<P> BlinkConfig<P> {
    /// Panics (at compile time when used in a `const`) on a zero interval.
    pub const fn new(pin: P, interval_us: u32) -> Self {
        assert!(interval_us > 0, "blink interval must be non-zero");
        BlinkConfig { pin, interval_us }
    }

    pub const fn from_millis(pin: P, interval_ms: u32) -> Self {
        assert!(interval_ms <= u32::MAX / 1000, "blink interval too long");
        Self::new(pin, interval_ms * 1000)
    }

    #[inline]
    pub const fn pin(&self) -> &P {
        &self.pin
    }

    /// Duration of each phase, in microseconds.
    #[inline]
    pub const fn interval_us(&self) -> u32 {
        self.interval_us
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Unconfigured,
    Driving(Level),
}

pub struct Blinker<P> {
    pin: P,
    interval_us: u32,
    state: State,
}

impl<P: OutputPin> Blinker<P> {
    /// Does not touch the hardware until [`start`](Self::start).
    pub fn new(config: BlinkConfig<P>) -> Self {
        Blinker {
            pin: config.pin,
            interval_us: config.interval_us,
            state: State::Unconfigured,
        }
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// The level currently driven, or `None` before [`start`](Self::start).
    #[inline]
    pub fn level(&self) -> Option<Level> {
        match self.state {
            State::Unconfigured => None,
            State::Driving(level) => Some(level),
        }
    }

    #[inline]
    pub fn interval_us(&self) -> u32 {
        self.interval_us
    }

    /// Configure the pin as an output and drive it high.
    ///
    /// The pin is only ever configured once; later calls return the current
    /// level unchanged.
    pub fn start(&mut self) -> Level {
        if let State::Driving(level) = self.state {
            return level;
        }

        self.pin.configure_output();
        debug!("pin configured as output, interval {} us", self.interval_us);
        self.drive(Level::High)
    }

    /// Wait one interval, then drive the opposite level.
    pub fn step<D: Delay>(&mut self, delay: &mut D) -> Level {
        let current = self.start();
        delay.delay_us(self.interval_us);
        self.drive(!current)
    }

    pub fn run<D: Delay>(mut self, mut delay: D) -> ! {
        self.start();
        loop {
            self.step(&mut delay);
        }
    }

    /// Release the pin. The pin keeps its last level and output mode.
    pub fn into_inner(self) -> P {
        self.pin
    }

    fn drive(&mut self, level: Level) -> Level {
        self.pin.set_level(level);
        self.state = State::Driving(level);
        trace!("pin {:?}", level);
        level
    }
}
