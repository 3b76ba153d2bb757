use core::ops::Not;

/// Logic level driven onto an output pin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// The opposite level.
    #[inline]
    pub const fn toggled(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl Not for Level {
    type Output = Level;

    #[inline]
    fn not(self) -> Level {
        self.toggled()
    }
}
