//! Build script for pushkit-notification.

use std::env;
use std::path::PathBuf;

const APPLE_BRIDGE: &str = "src/sys/apple/mod.rs";

fn main() {
    println!("cargo:rerun-if-changed={APPLE_BRIDGE}");

    let Ok(target_os) = env::var("CARGO_CFG_TARGET_OS") else {
        return;
    };

    if target_os == "ios" {
        let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
        let pkg_name = env::var("CARGO_PKG_NAME").expect("CARGO_PKG_NAME is set by cargo");

        swift_bridge_build::parse_bridges(vec![APPLE_BRIDGE])
            .write_all_concatenated(out_dir, &pkg_name);
    }
}
