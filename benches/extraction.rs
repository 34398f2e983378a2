//! Performance benchmarks for package extraction.
//!
//! Run with: cargo bench --bench extraction

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use vulners_sbom::parsers::{parse_document_str, LoadedDocument, Representation};
use vulners_sbom::extract_packages;

/// Generate a CycloneDX JSON document with the given number of library components.
fn generate_cyclonedx_json(count: usize) -> String {
    let mut components: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            let (scheme, arch) = if i % 3 == 0 {
                ("rpm", "x86_64")
            } else {
                ("deb", "amd64")
            };
            serde_json::json!({
                "type": "library",
                "name": format!("package-{i}"),
                "version": format!("1.{}.{}", i % 10, i % 100),
                "purl": format!("pkg:{scheme}/distro/package-{i}@1.{}.{}?arch={arch}&distro=debian-11", i % 10, i % 100),
            })
        })
        .collect();
    components.push(serde_json::json!({
        "type": "operating-system", "name": "debian", "version": "11"
    }));

    serde_json::json!({"bomFormat": "CycloneDX", "specVersion": "1.4", "components": components})
        .to_string()
}

/// Generate the same document as CycloneDX XML.
fn generate_cyclonedx_xml(count: usize) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?><bom xmlns="http://cyclonedx.org/schema/bom/1.4" version="1"><components>"#,
    );
    for i in 0..count {
        xml.push_str(&format!(
            "<component type=\"library\"><name>package-{i}</name><version>1.{v}</version>\
             <purl>pkg:rpm/distro/package-{i}@1.{v}?arch=x86_64&amp;distro=centos-8</purl></component>",
            v = i % 10
        ));
    }
    xml.push_str(
        "<component type=\"operating-system\"><name>centos</name><version>8</version></component>\
         </components></bom>",
    );
    xml
}

fn bench_extract_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_cyclonedx_json");

    for size in [100, 1_000, 10_000].iter() {
        let content = generate_cyclonedx_json(*size);
        let Ok(loaded) = parse_document_str(&content, Some(Representation::Json)) else {
            continue;
        };

        group.bench_with_input(BenchmarkId::new("extract", size), size, |b, _| {
            b.iter(|| black_box(extract_packages(black_box(&loaded.as_document()))));
        });
    }

    group.finish();
}

fn bench_load_and_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_and_extract");

    let json = generate_cyclonedx_json(1_000);
    group.bench_function("cyclonedx_json_1000", |b| {
        b.iter(|| {
            let loaded: Option<LoadedDocument> =
                parse_document_str(black_box(&json), Some(Representation::Json)).ok();
            loaded.map(|doc| black_box(extract_packages(&doc.as_document()).is_ok()))
        });
    });

    let xml = generate_cyclonedx_xml(1_000);
    group.bench_function("cyclonedx_xml_1000", |b| {
        b.iter(|| {
            let loaded = parse_document_str(black_box(&xml), Some(Representation::Xml)).ok();
            loaded.map(|doc| black_box(extract_packages(&doc.as_document()).is_ok()))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_extract_json, bench_load_and_extract);
criterion_main!(benches);
