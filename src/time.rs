//! Conversions between wall time and core clock ticks.

/// Largest number of ticks a single SysTick countdown can cover.
///
/// The reload register is 24 bits wide and the counter passes through zero,
/// so one period is `RVR + 1` ticks.
pub const SYSTICK_MAX_PERIOD: u32 = 1 << 24;

/// Number of core clock ticks in `us` microseconds at `hz`.
#[inline]
pub const fn us_to_ticks(us: u32, hz: u32) -> u64 {
    us as u64 * hz as u64 / 1_000_000
}

/// Number of whole microseconds covered by `ticks` at `hz`.
#[inline]
pub const fn ticks_to_us(ticks: u64, hz: u32) -> u64 {
    ticks * 1_000_000 / hz as u64
}

/// Splits a tick count into timer periods no longer than `max`.
///
/// Every period but the last is exactly `max` ticks; the periods sum to the
/// original count. A zero count yields nothing.
#[derive(Clone, Debug)]
pub struct TickChunks {
    remaining: u64,
    max: u32,
}

impl TickChunks {
    pub const fn new(ticks: u64, max: u32) -> Self {
        assert!(max > 0);
        TickChunks { remaining: ticks, max }
    }

    /// Periods sized for the SysTick reload range.
    pub const fn systick(ticks: u64) -> Self {
        Self::new(ticks, SYSTICK_MAX_PERIOD)
    }
}

impl Iterator for TickChunks {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }

        let chunk = if self.remaining > self.max as u64 {
            self.max
        } else {
            self.remaining as u32
        };
        self.remaining -= chunk as u64;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.div_ceil(self.max as u64) as usize;
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_second_at_pico_crystal_speed() {
        assert_eq!(us_to_ticks(500_000, 12_000_000), 6_000_000);
        assert_eq!(ticks_to_us(6_000_000, 12_000_000), 500_000);
    }

    #[test]
    fn conversion_does_not_overflow_for_long_delays() {
        // u32::MAX microseconds at 125 MHz exceeds u32 ticks.
        let ticks = us_to_ticks(u32::MAX, 125_000_000);
        assert_eq!(ticks, u32::MAX as u64 * 125);
    }

    #[test]
    fn chunks_cover_the_whole_count() {
        let ticks = 3 * SYSTICK_MAX_PERIOD as u64 + 1234;
        let chunks: Vec<u32> = TickChunks::systick(ticks).collect();

        assert_eq!(chunks.len(), 4);
        assert!(chunks[..3].iter().all(|&c| c == SYSTICK_MAX_PERIOD));
        assert_eq!(chunks[3], 1234);
        assert_eq!(chunks.iter().map(|&c| c as u64).sum::<u64>(), ticks);
    }

    #[test]
    fn exact_multiple_has_no_trailing_chunk() {
        let chunks: Vec<u32> = TickChunks::new(30, 10).collect();
        assert_eq!(chunks, [10, 10, 10]);
        assert_eq!(TickChunks::new(30, 10).size_hint(), (3, Some(3)));
    }

    #[test]
    fn zero_ticks_yields_nothing() {
        assert_eq!(TickChunks::systick(0).next(), None);
    }

    #[test]
    fn half_second_at_samd_speed_fits_one_period() {
        let ticks = us_to_ticks(500_000, 8_000_000);
        assert_eq!(TickChunks::systick(ticks).collect::<Vec<_>>(), [4_000_000]);
    }
}
