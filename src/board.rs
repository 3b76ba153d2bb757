//! Pin names printed on supported boards.

/// Raspberry Pi Pico.
#[cfg(feature = "rp2040")]
pub mod pico {
    use crate::rp::gpio::{self, IoPin};

    /// Onboard green LED.
    pub const LED: IoPin = gpio::GPIO25;
}

/// Arduino Zero.
#[cfg(feature = "samd21")]
pub mod arduino_zero {
    use crate::samd::gpio::{self, IoPin};

    pub const D13: IoPin = gpio::PA17;
    /// The "L" LED, wired to D13.
    pub const LED: IoPin = D13;
}

/// SAM D21 Xplained Pro evaluation kit.
#[cfg(feature = "samd21")]
pub mod samd21_xplained_pro {
    use crate::samd::gpio::{self, IoPin};

    /// Yellow user LED, active low.
    pub const LED0: IoPin = gpio::PB30;
}
