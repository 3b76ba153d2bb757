#[cfg(feature="samd11")]
pub use atsamd11d as pac;

#[cfg(feature="samd21")]
pub use atsamd21j as pac;

pub mod gpio;

/// OSC8M with its reset-default divide-by-8 prescaler removed.
pub const CLK_MAIN_HZ: u32 = 8_000_000;

pub(crate) fn init() {
    let sysctrl = unsafe { crate::samd::pac::SYSCTRL::steal() };
    let pm = unsafe { crate::samd::pac::PM::steal() };

    // GCLK0 feeds the CPU from OSC8M out of reset; only the prescaler changes.
    // 8 MHz needs no extra flash wait states.
    #[allow(unused_unsafe)]
    sysctrl.osc8m.modify(|_, w| unsafe { w.presc().bits(0) });
    while sysctrl.pclksr.read().osc8mrdy().bit_is_clear() {}

    pm.cpusel.write(|w| w.cpudiv().div1());
}
