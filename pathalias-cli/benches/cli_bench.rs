use std::path::Path;
use std::process::{Command, Stdio};

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

/// A project with one alias spread over `dirs` directories and a file in the
/// last-searched one.
fn project(dirs: usize) -> TempDir {
    let temp = TempDir::new().expect("failed to create temp dir");
    let mut yaml = String::from("aliases:\n  assets:\n");
    for i in 0..dirs {
        let dir = temp.path().join(format!("dir-{i}"));
        std::fs::create_dir_all(&dir).expect("failed to create bench dir");
        yaml.push_str(&format!("    - {}\n", dir.display()));
    }
    std::fs::write(temp.path().join("dir-0/hit.txt"), "").expect("failed to write bench file");
    std::fs::write(temp.path().join("pathalias.yaml"), yaml).expect("failed to write config");
    temp
}

fn pathalias(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pathalias").expect("failed to locate pathalias binary");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("PATHALIAS_ROOT")
        .env_remove("PATHALIAS_BASE_URL")
        .env_remove("PATHALIAS_CONFIG")
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    cmd
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let mut cmd =
                Command::cargo_bin("pathalias").expect("failed to locate pathalias binary");
            let output = cmd.arg("--version").output().expect("failed to run pathalias");
            black_box(output);
        });
    });
}

fn bench_cli_resolve(c: &mut Criterion) {
    let temp = project(16);
    c.bench_function("cli_resolve", |b| {
        b.iter(|| {
            let status = pathalias(temp.path())
                .args(["resolve", "assets:hit.txt"])
                .status()
                .expect("failed to execute pathalias resolve");
            black_box(status.success());
        });
    });
}

fn bench_cli_paths(c: &mut Criterion) {
    let temp = project(50);
    c.bench_function("cli_paths_json", |b| {
        b.iter(|| {
            let output = pathalias(temp.path())
                .args(["paths", "assets", "--format", "json"])
                .output()
                .expect("failed to execute pathalias paths");
            black_box(output);
        });
    });
}

criterion_group!(cli_benches, bench_cli_startup, bench_cli_resolve, bench_cli_paths);
criterion_main!(cli_benches);
