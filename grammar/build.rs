//! Fetches and compiles the nlprule English tokenizer into `OUT_DIR`

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR is set for build scripts");
    nlprule_build::BinaryBuilder::new(&["en"], out_dir)
        .build()
        .expect("failed to build nlprule binaries")
        .validate()
        .expect("failed to validate nlprule binaries");
}
