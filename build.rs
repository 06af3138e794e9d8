fn main() {
    // FFI scaffolding comes from the proc-macros in src/uniffi_bindings.rs;
    // there is no UDL file to compile here.
    println!("cargo:rerun-if-changed=build.rs");
}
