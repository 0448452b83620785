use std::env;
use std::path::PathBuf;

const HEADER: &str = "../rlib-ffi/include/rlib.h";

fn main() {
    println!("cargo:rerun-if-changed={}", HEADER);
    println!("cargo:rerun-if-env-changed=RLIB_LIB_DIR");
    println!("cargo:rerun-if-env-changed=RLIB_LIB_NAME");

    // The bundled core is linked as an ordinary Rust dependency.
    if env::var_os("CARGO_FEATURE_BUNDLED").is_none() {
        link_external();
    }

    #[cfg(feature = "bindgen")]
    generate_bindings();
}

/// Link a prebuilt librlib_ffi, e.g. `target/release/librlib_ffi.so`.
fn link_external() {
    match env::var("RLIB_LIB_DIR") {
        Ok(dir) => println!(
            "cargo:rustc-link-search=native={}",
            PathBuf::from(dir).display()
        ),
        Err(_) => println!(
            "cargo:warning=RLIB_LIB_DIR not set, relying on the default linker search path"
        ),
    }

    let name = env::var("RLIB_LIB_NAME").unwrap_or_else(|_| "rlib_ffi".to_string());
    println!("cargo:rustc-link-lib=dylib={}", name);
}

#[cfg(feature = "bindgen")]
fn generate_bindings() {
    let bindings = bindgen::Builder::default()
        .header(HEADER)
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
        .allowlist_function("rlib_.*")
        .allowlist_type("RlibStatus")
        .allowlist_type("rlib_error_t")
        .newtype_enum("RlibStatus")
        .generate()
        .expect("Unable to generate bindings");

    let out_path = PathBuf::from(env::var("OUT_DIR").unwrap());
    bindings
        .write_to_file(out_path.join("bindings.rs"))
        .expect("Couldn't write bindings!");
}
