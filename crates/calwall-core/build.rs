// File: crates/calwall-core/build.rs
// Summary: Links the Windows system library Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Registry lookups used by the DirectWrite font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
