use std::process::Command;

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

fn cxpath(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cxpath").expect("failed to locate cxpath binary");
    cmd.arg("--config-dir").arg(config_dir.path());
    cmd.args(["--platform", "posix"]);
    cmd
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let mut cmd = Command::cargo_bin("cxpath").expect("failed to locate cxpath binary");
            let output = cmd.arg("--version").output().expect("failed to run cxpath");
            black_box(output);
        });
    });
}

fn bench_cli_normal(c: &mut Criterion) {
    let config_dir = TempDir::new().expect("failed to create temp dir");
    c.bench_function("cli_normal", |b| {
        b.iter(|| {
            let output = cxpath(&config_dir)
                .args(["normal", "/usr/./local/../lib/x86_64-linux-gnu/"])
                .output()
                .expect("failed to run cxpath normal");
            black_box(output);
        });
    });
}

fn bench_cli_decompose_json(c: &mut Criterion) {
    let config_dir = TempDir::new().expect("failed to create temp dir");
    let paths: Vec<String> = (0..50).map(|i| format!("/srv/app{i}/conf/app.yaml")).collect();

    c.bench_function("cli_decompose_json_50", |b| {
        b.iter(|| {
            let output = cxpath(&config_dir)
                .args(["decompose", "--format", "json"])
                .args(&paths)
                .output()
                .expect("failed to run cxpath decompose");
            black_box(output);
        });
    });
}

criterion_group!(
    benches,
    bench_cli_startup,
    bench_cli_normal,
    bench_cli_decompose_json
);
criterion_main!(benches);
