use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds only carry the portable core and the simulator
    let target = env::var("TARGET").unwrap_or_default();
    if !target.contains("avr") {
        return;
    }

    // Configure for ATmega128
    println!("cargo:rustc-link-arg-bins=-mmcu=atmega128");
    println!("cargo:warning=Building vcc_gauge for ATmega128 at 1MHz");
}
