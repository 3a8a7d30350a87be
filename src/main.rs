// Native non-test builds only print a hint; the page itself lives behind wasm32.
#[cfg_attr(all(not(target_arch = "wasm32"), not(test)), allow(dead_code))]
mod config;
#[cfg_attr(all(not(target_arch = "wasm32"), not(test)), allow(dead_code))]
mod content;
#[cfg_attr(all(not(target_arch = "wasm32"), not(test)), allow(dead_code))]
mod log;
#[cfg_attr(all(not(target_arch = "wasm32"), not(test)), allow(dead_code))]
mod rain;
#[cfg_attr(all(not(target_arch = "wasm32"), not(test)), allow(dead_code))]
mod theme;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
