//! Performance benchmarks for the render path.

use azinject::config;
use azinject::emit;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

const FULL_SETTINGS: &str = r#"{
    "Azure": {
        "ClientId": "11111111-2222-3333-4444-555555555555",
        "Environment": "public",
        "SubId": "sub-1",
        "TenantId": "tenant-1",
        "AuxTenantId": ["aux-1", "aux-2", "aux-3"],
        "ClientCertPath": "/etc/azure/cert.pfx",
        "ClientSecret": "s3cret",
        "UseMsi": true,
        "SkipProviderReg": true,
        "Features": {
            "ApiMngmt": { "PurgeOnDestroy": true },
            "KeyVault": { "PurgeOnDestroy": true, "RecoverSoftDelete": true },
            "VirtMachine": { "DeleteOsDisk": true, "GracefulShutdown": true },
            "VMSS": { "ForceDelete": true, "RollInstances": true }
        }
    }
}"#;

/// Benchmark rendering a fully populated settings record.
fn benchmark_render_full(c: &mut Criterion) {
    let config = config::load_str(FULL_SETTINGS).unwrap();

    let mut group = c.benchmark_group("render");
    group.bench_function("full_settings", |b| {
        b.iter(|| {
            let text = emit::render("azurerm", black_box(&config.azure)).unwrap();
            black_box(text);
        });
    });
    group.finish();
}

/// Benchmark rendering an all-defaults record (bare provider block).
fn benchmark_render_empty(c: &mut Criterion) {
    let config = config::load_str("{}").unwrap();

    let mut group = c.benchmark_group("render");
    group.bench_function("empty_settings", |b| {
        b.iter(|| {
            let text = emit::render("azurerm", black_box(&config.azure)).unwrap();
            black_box(text);
        });
    });
    group.finish();
}

/// Benchmark the loader on the same document.
fn benchmark_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    group.bench_function("full_settings", |b| {
        b.iter(|| {
            let config = config::load_str(black_box(FULL_SETTINGS)).unwrap();
            black_box(config);
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_render_full,
    benchmark_render_empty,
    benchmark_load
);
criterion_main!(benches);
