use rp_pac::{io::Io, SIO};

use crate::{Level, OutputPin};

/// GPIO function select values (`GPIOx_CTRL.FUNCSEL`).
#[derive(Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Function {
    Spi = 1,
    Uart = 2,
    I2c = 3,
    Pwm = 4,
    /// Software control through the SIO block.
    Sio = 5,
    Pio0 = 6,
    Pio1 = 7,
    Clock = 8,
    Usb = 9,
    Null = 31,
}

/// One pin of the user IO bank.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IoPin {
    pin: u8,
}

impl IoPin {
    pub const fn new(pin: u8) -> IoPin {
        assert!(pin < 30, "RP2040 has GPIO0 to GPIO29");
        IoPin { pin }
    }

    #[inline]
    pub const fn number(&self) -> u8 {
        self.pin
    }

    #[inline]
    fn mask(&self) -> u32 {
        1 << self.pin
    }

    #[inline]
    fn io(&self) -> Io {
        crate::rp::pac::IO_BANK0
    }

    #[inline]
    pub fn set_function(&self, func: Function) {
        self.io().gpio(self.pin as usize).ctrl().write(|w| {
            w.set_funcsel(func as u8);
        });
    }

    #[inline]
    pub fn oe_set(&self) {
        SIO.gpio_oe(0).value_set().write_value(self.mask())
    }

    #[inline]
    pub fn out_set(&self) {
        SIO.gpio_out(0).value_set().write_value(self.mask())
    }

    #[inline]
    pub fn out_clr(&self) {
        SIO.gpio_out(0).value_clr().write_value(self.mask())
    }
}

impl OutputPin for IoPin {
    fn configure_output(&mut self) {
        // Start low so the pin does not glitch high before the first drive
        self.out_clr();
        self.oe_set();
        self.set_function(Function::Sio);
    }

    #[inline]
    fn set_level(&mut self, level: Level) {
        match level {
            Level::High => self.out_set(),
            Level::Low => self.out_clr(),
        }
    }
}

macro_rules! pins {
    ($($pin_id:ident = $pin_num:literal,)+) => {
        $(
            pub const $pin_id: IoPin = IoPin::new($pin_num);
        )+
    };
}

pins! {
    GPIO00 = 0,
    GPIO01 = 1,
    GPIO02 = 2,
    GPIO03 = 3,
    GPIO04 = 4,
    GPIO05 = 5,
    GPIO06 = 6,
    GPIO07 = 7,
    GPIO08 = 8,
    GPIO09 = 9,
    GPIO10 = 10,
    GPIO11 = 11,
    GPIO12 = 12,
    GPIO13 = 13,
    GPIO14 = 14,
    GPIO15 = 15,
    GPIO16 = 16,
    GPIO17 = 17,
    GPIO18 = 18,
    GPIO19 = 19,
    GPIO20 = 20,
    GPIO21 = 21,
    GPIO22 = 22,
    GPIO23 = 23,
    GPIO24 = 24,
    GPIO25 = 25,
    GPIO26 = 26,
    GPIO27 = 27,
    GPIO28 = 28,
    GPIO29 = 29,
}
