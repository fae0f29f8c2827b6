// Browser behavior compiles for the wasm frontend; the host build keeps the
// same modules for unit tests.
#[cfg(any(target_arch = "wasm32", test))]
mod clipboard;
#[cfg(any(target_arch = "wasm32", test))]
mod config;
#[cfg(any(target_arch = "wasm32", test))]
mod contact;
#[cfg(any(target_arch = "wasm32", test))]
mod decor;
#[cfg(any(target_arch = "wasm32", test))]
mod devtools;
#[cfg(any(target_arch = "wasm32", test))]
mod menu;
#[cfg(any(target_arch = "wasm32", test))]
mod scroll_spy;
#[cfg(any(target_arch = "wasm32", test))]
mod selectors;
#[cfg(any(target_arch = "wasm32", test))]
mod smooth_scroll;
#[cfg(any(target_arch = "wasm32", test))]
mod toast;
#[cfg(any(target_arch = "wasm32", test))]
mod visibility;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}
