use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    // Footer stamps; SSR and hydrate must render the same values
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    println!("cargo:rerun-if-changed=build.rs");
}
