// benches/structure.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use bluebook_scrape::config::options::{Anchor, ExportFormat};
use bluebook_scrape::{pages, render};

const PAGE: &str = include_str!("../tests/fixtures/t2_18_india.html");

fn bench_structure(c: &mut Criterion) {
    let anchor = Anchor::default();

    c.bench_function("structure_india", |b| {
        b.iter(|| {
            let doc = pages::structure_at(black_box(PAGE), &anchor, "bench", String::new())
                .expect("fixture parses");
            black_box(doc.node_count())
        })
    });

    let doc = pages::structure_at(PAGE, &anchor, "bench", String::new()).expect("fixture parses");
    c.bench_function("render_markdown", |b| {
        b.iter(|| black_box(render::render(black_box(&doc), ExportFormat::Markdown).map(|s| s.len())))
    });
}

criterion_group!(benches, bench_structure);
criterion_main!(benches);
