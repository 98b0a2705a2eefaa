use std::fs;
use std::path::Path;

// Bundles the trunk output of the frontend into `static/dist`, which the
// server embeds. Without a frontend build the committed fallback page is used.
fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.join("index.html").exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("cannot create backend/static");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .expect("cannot copy frontend/dist into backend/static");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
