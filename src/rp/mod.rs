use rp_pac::{clocks::vals::{ClkRefCtrlSrc, ClkSysCtrlSrc}, resets::regs::Peripherals};
pub use rp_pac as pac;

mod rp_reg;
pub use rp_reg::RpReg;

pub mod gpio;

const XOSC_HZ: u32 = 12_000_000;
const XOSC_STARTUP_DELAY_MS: u32 = 1;

pub const CLK_REF_HZ: u32 = XOSC_HZ;
pub const CLK_SYS_HZ: u32 = CLK_REF_HZ;

/// Run the core from the crystal and bring up the user GPIO bank.
///
/// The PLLs are left off; a 12 MHz core clock is plenty for driving pins.
pub(crate) fn init() {
    // Make sure clk_sys is on the glitchless clk_ref mux before touching clk_ref
    pac::CLOCKS.clk_sys_resus_ctrl().write_value(pac::clocks::regs::ClkSysResusCtrl(0));
    pac::CLOCKS.clk_sys_ctrl().modify(|w| w.set_src(ClkSysCtrlSrc::CLK_REF));
    while pac::CLOCKS.clk_sys_selected().read() != 1 << ClkSysCtrlSrc::CLK_REF as u32 {}
    pac::CLOCKS.clk_ref_ctrl().modify(|w| w.set_src(ClkRefCtrlSrc::ROSC_CLKSRC_PH));
    while pac::CLOCKS.clk_ref_selected().read() != 1 << ClkRefCtrlSrc::ROSC_CLKSRC_PH as u32 {}

    // Reset everything except the flash interface we are executing from
    let mut to_reset = Peripherals(0x01ff_ffff);
    to_reset.set_io_qspi(false);
    to_reset.set_pads_qspi(false);
    pac::RESETS.reset().write_value_set(to_reset);

    let startup_delay = (((XOSC_HZ / 1000) * XOSC_STARTUP_DELAY_MS) + 128) / 256;
    pac::XOSC.startup().write(|w| w.set_delay(startup_delay as u16));
    pac::XOSC.ctrl().write(|w| {
        w.set_freq_range(pac::xosc::vals::CtrlFreqRange::_1_15MHZ);
        w.set_enable(pac::xosc::vals::Enable::ENABLE);
    });
    while !pac::XOSC.status().read().stable() {}

    // clk_ref, and through it clk_sys, now run from the crystal
    pac::CLOCKS.clk_ref_ctrl().modify(|w| w.set_src(ClkRefCtrlSrc::XOSC_CLKSRC));
    while pac::CLOCKS.clk_ref_selected().read() != 1 << ClkRefCtrlSrc::XOSC_CLKSRC as u32 {}

    let mut enable = Peripherals::default();
    enable.set_io_bank0(true);
    enable.set_pads_bank0(true);
    pac::RESETS.reset().write_value_clear(enable);
    while ((!pac::RESETS.reset_done().read().0) & enable.0) != 0 {}
}

#[cfg(feature = "rp2040-boot2-w25q080")]
#[link_section = ".boot2"]
#[used]
static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_W25Q080;
