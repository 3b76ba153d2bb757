//! Component exporting two pure functions, `add` and `greet`.
//!
//! Build with
//!
//! ```text
//! cargo build -p tinyblink-greeter --target wasm32-unknown-unknown --release
//! wasm-tools component new target/wasm32-unknown-unknown/release/tinyblink_greeter.wasm \
//!     -o greeter.wasm
//! ```
//!
//! and run with `tinyblink-host greeter.wasm greet World`.

wit_bindgen::generate!({
    path: "wit",
    world: "greeter",
});

use tinyblink::greeter::logging::log;

/// Line logged through the host once the module is loaded.
pub const LOADED_BANNER: &str = "tinyblink greeter module loaded!";

pub mod ops {
    /// Two's-complement sum; `i32::MAX + 1` is `i32::MIN`.
    pub fn add(a: i32, b: i32) -> i32 {
        a.wrapping_add(b)
    }

    pub fn greet(name: &str) -> String {
        format!("Hello, {}!", name)
    }
}

struct Component;

impl Guest for Component {
    fn init() {
        log(LOADED_BANNER);
    }

    fn add(a: i32, b: i32) -> i32 {
        ops::add(a, b)
    }

    fn greet(name: String) -> String {
        ops::greet(&name)
    }
}

export!(Component);

#[cfg(test)]
mod tests {
    use super::ops::{add, greet};

    #[test]
    fn adds_small_numbers() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-5, 5), 0);
    }

    #[test]
    fn add_wraps_on_overflow() {
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(add(i32::MIN, -1), i32::MAX);
    }

    #[test]
    fn add_is_commutative() {
        let samples = [0, 1, -1, 7, -42, 1 << 20, i32::MAX, i32::MIN, i32::MAX - 3];
        for &a in &samples {
            for &b in &samples {
                assert_eq!(add(a, b), add(b, a), "add({a}, {b})");
            }
        }
    }

    #[test]
    fn greets_by_name() {
        assert_eq!(greet("World"), "Hello, World!");
    }

    #[test]
    fn empty_name_is_not_special() {
        assert_eq!(greet(""), "Hello, !");
    }

    #[test]
    fn name_is_inserted_verbatim() {
        assert_eq!(greet("  Zoë!\n"), "Hello,   Zoë!\n!");
    }
}
