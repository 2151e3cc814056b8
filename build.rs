use std::env;

fn main() {
    // The MCU flag only makes sense for AVR firmware builds. Host builds
    // (tests, the preview binary) must go through untouched.
    let target = env::var("TARGET").unwrap_or_default();
    if target.contains("avr") {
        println!("cargo:rustc-link-arg=-mmcu=atmega128");
    }
}
