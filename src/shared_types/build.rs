use anyhow::Result;
use crux_core::typegen::TypeGen;
use network_monitor_core::{App, Importance, Visibility};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register enums to ensure all variants are traced
    gen.register_type::<Importance>()?;
    gen.register_type::<Visibility>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
