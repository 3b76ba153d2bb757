#![no_std]
#![no_main]

use panic_probe as _;
use defmt_rtt as _;

use tinyblink::{board::pico, blink::DEFAULT_INTERVAL_MS, rp::gpio::IoPin, BlinkConfig, Blinker, Hardware};

const CONFIG: BlinkConfig<IoPin> = BlinkConfig::from_millis(pico::LED, DEFAULT_INTERVAL_MS);

#[tinyblink::main]
fn main(hw: Hardware) -> ! {
    defmt::info!("blinking onboard LED");
    Blinker::new(CONFIG).run(hw.delay)
}
