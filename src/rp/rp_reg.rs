// Based on Embassy, under MIT OR Apache-2.0

/// Extension trait for PAC regs, using the atomic set/clear register aliases.
///
/// Every RP2040 peripheral register has an alias at `+0x2000` that sets the
/// written bits and one at `+0x3000` that clears them.
pub trait RpReg<T: Copy> {
    fn write_value_set(&self, v: T);
    fn write_value_clear(&self, v: T);
}

impl<T: Copy, A: super::pac::common::Write> RpReg<T> for super::pac::common::Reg<T, A> {
    fn write_value_set(&self, v: T) {
        unsafe {
            let ptr = (self.as_ptr() as *mut u8).add(0x2000) as *mut T;
            ptr.write_volatile(v);
        }
    }

    fn write_value_clear(&self, v: T) {
        unsafe {
            let ptr = (self.as_ptr() as *mut u8).add(0x3000) as *mut T;
            ptr.write_volatile(v);
        }
    }
}
