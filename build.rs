// Simple build script that mirrors static assets into `dist/`.
use fs_extra::dir::{self, CopyOptions};
use std::{fs, path::Path};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    fs::create_dir_all(out_dir).ok();

    let static_dir = Path::new("static");
    if static_dir.exists() {
        let mut options = CopyOptions::new();
        options.content_only = true;
        options.overwrite = true;
        if dir::copy(static_dir, out_dir, &options).is_err() {
            println!("cargo:warning=failed to copy static/ to dist/");
        }
    }
}
