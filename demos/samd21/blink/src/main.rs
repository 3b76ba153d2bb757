#![no_std]
#![no_main]

use panic_probe as _;
use defmt_rtt as _;

use tinyblink::{board::arduino_zero, blink::DEFAULT_INTERVAL_MS, samd::gpio::IoPin, BlinkConfig, Blinker, Hardware};

// Built-in LED on most Arduino boards
const CONFIG: BlinkConfig<IoPin> = BlinkConfig::from_millis(arduino_zero::D13, DEFAULT_INTERVAL_MS);

#[tinyblink::main]
fn main(hw: Hardware) -> ! {
    defmt::info!("Blinking LED on Arduino pin 13...");
    Blinker::new(CONFIG).run(hw.delay)
}
