use crate::samd::pac::{PORT, PORT_IOBUS};
use crate::samd::pac::port::{
    CTRL, DIR, DIRCLR, DIRSET, DIRTGL, IN, OUT, OUTCLR, OUTSET, OUTTGL, PINCFG0_ as PINCFG,
    PMUX0_ as PMUX, WRCONFIG,
};
use crate::{Level, OutputPin};

/// The [`PORT`] register block
#[repr(C)]
#[allow(clippy::upper_case_acronyms, dead_code)]
struct GROUP {
    dir: DIR,
    dirclr: DIRCLR,
    dirset: DIRSET,
    dirtgl: DIRTGL,
    out: OUT,
    outclr: OUTCLR,
    outset: OUTSET,
    outtgl: OUTTGL,
    in_: IN,
    ctrl: CTRL,
    wrconfig: WRCONFIG,
    _padding1: [u8; 4],
    pmux: [PMUX; 16],
    pincfg: [PINCFG; 32],
    _padding2: [u8; 32],
}

/// Number of PORT groups: A and B on SAMD21, only A on SAMD11.
const PORT_GROUPS: u8 = if cfg!(feature = "samd21") { 2 } else { 1 };

/// One pin, addressed by port group (A = 0, B = 1) and index within it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IoPin {
    group: u8,
    pin: u8,
}

impl IoPin {
    pub const fn new(group: u8, pin: u8) -> IoPin {
        assert!(group < PORT_GROUPS, "no such PORT group on this chip");
        assert!(pin < 32);
        IoPin { group, pin }
    }

    #[inline]
    pub const fn group_index(&self) -> u8 {
        self.group
    }

    #[inline]
    pub const fn pin_index(&self) -> u8 {
        self.pin
    }

    #[inline]
    fn group(&self) -> &'static GROUP {
        const GROUPS: *const GROUP = PORT::ptr() as *const _;
        unsafe { &*GROUPS.add(self.group as usize) }
    }

    #[inline]
    fn group_iobus(&self) -> &'static GROUP {
        const GROUPS: *const GROUP = PORT_IOBUS::ptr() as *const _;
        unsafe { &*GROUPS.add(self.group as usize) }
    }

    #[inline]
    fn mask_32(&self) -> u32 {
        1 << self.pin as u32
    }

    #[inline]
    fn mask_16(&self) -> u16 {
        1 << (self.pin & 0xF)
    }

    #[inline]
    fn hwsel(&self) -> bool {
        self.pin & 0x10 != 0
    }

    /// Disconnect the peripheral multiplexer so PORT drives the pin.
    #[inline]
    pub fn set_io(&self) {
        self.group().wrconfig.write(|w| {
            w.hwsel().bit(self.hwsel());
            w.wrpincfg().set_bit();
            w.wrpmux().set_bit();
            w.pmux().variant(0);
            w.pmuxen().bit(false);
            w.pinmask().variant(self.mask_16())
        });
    }

    #[inline]
    pub fn outset(&self) {
        unsafe {
            self.group_iobus().outset.write(|w| w.bits(self.mask_32()));
        }
    }

    #[inline]
    pub fn outclr(&self) {
        unsafe {
            self.group_iobus().outclr.write(|w| w.bits(self.mask_32()));
        }
    }

    #[inline]
    pub fn dirset(&self) {
        unsafe {
            self.group_iobus().dirset.write(|w| w.bits(self.mask_32()));
        }
    }
}

impl OutputPin for IoPin {
    fn configure_output(&mut self) {
        self.outclr();
        self.set_io();
        self.dirset();
    }

    #[inline]
    fn set_level(&mut self, level: Level) {
        match level {
            Level::High => self.outset(),
            Level::Low => self.outclr(),
        }
    }
}

macro_rules! pins {
    ($($group_num:literal { $($pin_id:ident = $pin_num:literal,)+ } ),+) => {
        $(
            $(
                pub const $pin_id: IoPin = IoPin::new($group_num, $pin_num);
            )+
        )+
    };
}

pins! {
    0 {
        PA00 = 0,
        PA01 = 1,
        PA02 = 2,
        PA03 = 3,
        PA04 = 4,
        PA05 = 5,
        PA06 = 6,
        PA07 = 7,
        PA08 = 8,
        PA09 = 9,
        PA10 = 10,
        PA11 = 11,
        PA12 = 12,
        PA13 = 13,
        PA14 = 14,
        PA15 = 15,
        PA16 = 16,
        PA17 = 17,
        PA18 = 18,
        PA19 = 19,
        PA20 = 20,
        PA21 = 21,
        PA22 = 22,
        PA23 = 23,
        PA24 = 24,
        PA25 = 25,
        PA26 = 26,
        PA27 = 27,
        PA28 = 28,
        PA29 = 29,
        PA30 = 30,
        PA31 = 31,
    }
}

#[cfg(feature = "samd21")]
pins! {
    1 {
        PB00 = 0,
        PB01 = 1,
        PB02 = 2,
        PB03 = 3,
        PB04 = 4,
        PB05 = 5,
        PB06 = 6,
        PB07 = 7,
        PB08 = 8,
        PB09 = 9,
        PB10 = 10,
        PB11 = 11,
        PB12 = 12,
        PB13 = 13,
        PB14 = 14,
        PB15 = 15,
        PB16 = 16,
        PB17 = 17,
        PB18 = 18,
        PB19 = 19,
        PB20 = 20,
        PB21 = 21,
        PB22 = 22,
        PB23 = 23,
        PB24 = 24,
        PB25 = 25,
        PB26 = 26,
        PB27 = 27,
        PB28 = 28,
        PB29 = 29,
        PB30 = 30,
        PB31 = 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_carry_group_and_index() {
        assert_eq!((PA17.group_index(), PA17.pin_index()), (0, 17));
    }

    #[cfg(feature = "samd21")]
    #[test]
    fn samd21_has_port_b() {
        assert_eq!((PB30.group_index(), PB30.pin_index()), (1, 30));
    }

    #[cfg(not(feature = "samd21"))]
    #[test]
    #[should_panic(expected = "no such PORT group")]
    fn port_b_is_rejected_without_it() {
        let _ = IoPin::new(1, 0);
    }
}
