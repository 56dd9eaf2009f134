// benches/pipeline.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use carplot::chart;
use carplot::doc::PageDoc;
use carplot::{pipeline, specs};

/// A page with `n` listing elements shaped like the real markup.
fn synthetic_page(n: usize) -> String {
    let mut page = String::with_capacity(n * 600);
    page.push_str("<!DOCTYPE html><html><body><main>");
    for i in 0..n {
        let price = 9_000 + (i * 731) % 90_000;
        let year = 2005 + (i % 20) as i32;
        let mileage = 20_000 + (i * 517) % 180_000;
        page.push_str(&format!(
            "<article class=\"styled__Article-sc-1n64x0q-0 b{i}\">\
             <h2 class=\"Title__StyledTitle-sc-1n64x0q-2\">Bil nummer {i}</h2>\
             <div><p class=\"Price__StyledPrice-sc-1n64x0q-5\">{p} kr</p></div>\
             <ul>\
             <li class=\"ParametersList__ListItem-sc-a4l9en-1\">{y}</li>\
             <li class=\"ParametersList__ListItem-sc-a4l9en-1\">Bensin</li>\
             <li class=\"ParametersList__ListItem-sc-a4l9en-1\">{m} - {m2} km</li>\
             </ul></article>",
            i = i,
            p = price,
            y = year,
            m = mileage,
            m2 = mileage + 4_999,
        ));
    }
    page.push_str("</main></body></html>");
    page
}

fn bench_pipeline(c: &mut Criterion) {
    let page = synthetic_page(300);
    let site = specs::default_site();

    c.bench_function("scan_300", |b| {
        let doc = PageDoc::parse(page.clone());
        b.iter(|| {
            let set = pipeline::run(black_box(&doc), site, 2024);
            black_box(set.listings.len())
        })
    });

    c.bench_function("parse_scan_bind_300", |b| {
        b.iter(|| {
            let doc = PageDoc::parse(black_box(page.clone()));
            let set = pipeline::run(&doc, site, 2024);
            let chart = chart::bind(set.listings);
            black_box(chart.map(|ch| ch.len()))
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
