//! Reading benchmarks for ASCII DXF input.
//!
//! Documents are generated in memory: a LAYER table and a mix of points
//! and polylines spread over a handful of layers.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ggdxf::{DxfReader, DxfReaderConfiguration};
use std::fmt::Write;

const LAYERS: [&str; 4] = ["0", "GEM", "KANTON", "BEZIRK"];

fn generate(entities: usize) -> String {
    let mut out = String::new();
    out.push_str("0\nSECTION\n2\nHEADER\n9\n$ACADVER\n1\nAC1009\n0\nENDSEC\n");

    let _ = write!(out, "0\nSECTION\n2\nTABLES\n0\nTABLE\n2\nLAYER\n70\n{}\n", LAYERS.len());
    for layer in LAYERS {
        let _ = write!(out, "0\nLAYER\n2\n{}\n70\n0\n62\n7\n6\nCONTINUOUS\n", layer);
    }
    out.push_str("0\nENDTAB\n0\nENDSEC\n0\nSECTION\n2\nBLOCKS\n0\nENDSEC\n");

    out.push_str("0\nSECTION\n2\nENTITIES\n");
    for i in 0..entities {
        let layer = LAYERS[i % LAYERS.len()];
        let x = 600_000.0 + i as f64;
        let y = 200_000.0 + (i % 97) as f64;
        if i % 3 == 0 {
            let _ = write!(out, "0\nPOLYLINE\n8\n{}\n66\n1\n70\n1\n", layer);
            for v in 0..8 {
                let _ = write!(
                    out,
                    "0\nVERTEX\n8\n{}\n10\n{:.3}\n20\n{:.3}\n30\n0.0\n",
                    layer,
                    x + v as f64,
                    y + (v * v) as f64
                );
            }
            let _ = write!(out, "0\nSEQEND\n8\n{}\n", layer);
        } else {
            let _ = write!(out, "0\nPOINT\n8\n{}\n10\n{:.3}\n20\n{:.3}\n30\n0.0\n", layer, x, y);
        }
    }
    out.push_str("0\nENDSEC\n0\nEOF\n");
    out
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");
    for entities in [100usize, 1_000, 10_000] {
        let data = generate(entities).into_bytes();
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(entities), &data, |b, data| {
            b.iter(|| {
                let doc = DxfReader::from_bytes(data.clone()).read().unwrap();
                black_box(doc.entities.len())
            })
        });
    }
    group.finish();
}

fn bench_chunk_size(c: &mut Criterion) {
    let data = generate(2_000).into_bytes();
    let mut group = c.benchmark_group("chunk_size");
    group.throughput(Throughput::Bytes(data.len() as u64));
    for chunk_size in [64usize, 512, 4096, 65_536] {
        let config = DxfReaderConfiguration {
            chunk_size,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(chunk_size), &config, |b, config| {
            b.iter(|| {
                let doc = DxfReader::from_bytes(data.clone())
                    .with_configuration(config.clone())
                    .read()
                    .unwrap();
                black_box(doc.entities.len())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_read, bench_chunk_size);
criterion_main!(benches);
