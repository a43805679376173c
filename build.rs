fn main() {
    // UniFFI scaffolding comes from uniffi::setup_scaffolding!() in uniffi_bindings.rs,
    // so there is no UDL file to compile here

    // Ensure we rebuild when these files change
    println!("cargo:rerun-if-changed=src/uniffi_bindings.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
