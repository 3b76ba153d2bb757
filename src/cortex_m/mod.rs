//! Cortex-M core peripherals shared by all supported chips.

pub mod systick;
