use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn flatnote_cmd() -> Command {
    let mut cmd = Command::cargo_bin("flatnote").unwrap();
    cmd.env_remove("FLATNOTE_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize a vault at `root` exporting to `export_dir`
#[allow(dead_code)]
pub fn init_vault(root: &Path, export_dir: &Path) {
    flatnote_cmd().arg("init").arg(root).assert().success();
    flatnote_cmd()
        .current_dir(root)
        .arg("config")
        .arg("export-path")
        .arg(export_dir)
        .assert()
        .success();
}

#[allow(dead_code)]
pub fn write_file(root: &Path, rel: &str, bytes: &[u8]) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, bytes).unwrap();
}
