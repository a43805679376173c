//! UniFFI bindgen CLI for generating Swift/Kotlin bindings from recipe-finder.
//!
//! ```bash
//! cargo run --features uniffi-cli --bin uniffi-bindgen generate \
//!     --library target/release/librecipe_finder.so --language kotlin --out-dir ./bindings
//! ```

fn main() {
    uniffi::uniffi_bindgen_main()
}
