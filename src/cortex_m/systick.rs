use cortex_m::peripheral::{syst, SYST};

use crate::time::{us_to_ticks, TickChunks};
use crate::Delay;

const SYST_CSR_ENABLE: u32 = 1 << 0;
const SYST_CSR_CLKSOURCE: u32 = 1 << 2;
const SYST_CSR_COUNTFLAG: u32 = 1 << 16;

/// Busy-wait delay on the SysTick timer, clocked from the core clock.
///
/// The timer runs only while a delay is in progress. Delays longer than one
/// 24-bit period are made of several back-to-back periods.
pub struct SysTickDelay {
    core_hz: u32,
}

impl SysTickDelay {
    /// SAFETY: takes over the SysTick peripheral; nothing else may use it.
    pub(crate) unsafe fn new(core_hz: u32) -> SysTickDelay {
        let delay = SysTickDelay { core_hz };
        unsafe { delay.registers().csr.write(0) }
        delay
    }

    pub fn registers(&self) -> &syst::RegisterBlock {
        unsafe { &*SYST::PTR }
    }

    #[inline]
    pub fn core_hz(&self) -> u32 {
        self.core_hz
    }

    /// Block for `ticks` core clock cycles.
    pub fn delay_ticks(&mut self, ticks: u64) {
        let regs = self.registers();

        for period in TickChunks::systick(ticks) {
            // RVR = 0 stops the counter, so a one-tick remainder is stretched to two.
            let reload = period.saturating_sub(1).max(1);

            unsafe {
                regs.csr.write(0);
                regs.rvr.write(reload);
                regs.cvr.write(0);
                regs.csr.write(SYST_CSR_ENABLE | SYST_CSR_CLKSOURCE);
            }

            while regs.csr.read() & SYST_CSR_COUNTFLAG == 0 {}
        }

        unsafe { regs.csr.write(0) }
    }
}

impl Delay for SysTickDelay {
    fn delay_us(&mut self, us: u32) {
        self.delay_ticks(us_to_ticks(us, self.core_hz))
    }
}
