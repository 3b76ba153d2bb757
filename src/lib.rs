#![cfg_attr(not(test), no_std)]

mod fmt;

mod level;
pub use level::Level;

pub mod blink;
pub use blink::{BlinkConfig, Blinker, Delay, OutputPin};

pub mod time;

pub mod board;

#[cfg(feature = "cortex-m")]
pub mod cortex_m;

#[cfg(feature = "rp2040")]
pub mod rp;

#[cfg(any(feature = "samd21", feature = "samd11"))]
pub mod samd;

#[cfg(feature = "cortex-m")]
pub use tinyblink_macros::main_cortex_m as main;

#[cfg(all(feature = "rp2040", any(feature = "samd21", feature = "samd11")))]
compile_error!("enable only one chip feature");

#[cfg(all(feature = "cortex-m", not(any(feature = "rp2040", feature = "samd21", feature = "samd11"))))]
compile_error!("the `cortex-m` feature needs a chip feature (`rp2040`, `samd21` or `samd11`)");

/// Core clock frequency after [`internal::init`] has run.
#[cfg(feature = "rp2040")]
pub const CORE_CLOCK_HZ: u32 = rp::CLK_SYS_HZ;

/// Core clock frequency after [`internal::init`] has run.
#[cfg(any(feature = "samd21", feature = "samd11"))]
pub const CORE_CLOCK_HZ: u32 = samd::CLK_MAIN_HZ;

#[cfg(feature = "cortex-m")]
#[doc(hidden)]
pub mod internal {
    pub use cortex_m_rt;

    /// Bring the chip to a known clock and hand out the hardware token.
    ///
    /// SAFETY: must be called exactly once, from the reset entry point.
    #[inline(always)]
    pub unsafe fn init() -> crate::Hardware {
        cortex_m::interrupt::disable();

        #[cfg(feature = "rp2040")]
        crate::rp::init();

        #[cfg(any(feature = "samd21", feature = "samd11"))]
        crate::samd::init();

        info!("clocks up, core at {} Hz", crate::CORE_CLOCK_HZ);

        unsafe { crate::Hardware::steal() }
    }
}

/// Hardware capabilities owned by the application's `main`.
///
/// There is only one of these, created by the entry point.
#[cfg(feature = "cortex-m")]
pub struct Hardware {
    pub delay: crate::cortex_m::systick::SysTickDelay,
    _not_send: core::marker::PhantomData<*mut ()>,
}

#[cfg(feature = "cortex-m")]
impl Hardware {
    /// SAFETY: the caller must ensure no other `Hardware` exists, and that
    /// the clocks have been configured for [`CORE_CLOCK_HZ`].
    pub unsafe fn steal() -> Hardware {
        Hardware {
            delay: unsafe { crate::cortex_m::systick::SysTickDelay::new(CORE_CLOCK_HZ) },
            _not_send: core::marker::PhantomData,
        }
    }
}
