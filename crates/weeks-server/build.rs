use std::path::PathBuf;

fn main() {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap());
    let dist = manifest_dir.join("../../frontend/dist");

    // Release builds embed the assets at compile time; rebuild when they change.
    for rel in ["index.html", "app.js", "app.css"] {
        println!("cargo:rerun-if-changed={}", dist.join(rel).display());
    }
}
