fn main() {
    // Build timestamp, used for the footer copyright year
    let build_time = chrono::Utc::now().to_rfc3339();

    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
