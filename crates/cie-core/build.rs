// File: crates/cie-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's DirectWrite font manager reads the registry.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
