use blockmatch::{downscale_half, scan_full, GridView, Metric};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn make_image(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
            data.push(value as u8);
        }
    }
    data
}

fn extract_patch(
    image: &[u8],
    img_width: usize,
    x0: usize,
    y0: usize,
    width: usize,
    height: usize,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(width * height);
    for y in 0..height {
        let row = (y0 + y) * img_width;
        for x in 0..width {
            out.push(image[row + x0 + x]);
        }
    }
    out
}

fn bench_scan(c: &mut Criterion) {
    let sub_width = 256;
    let sub_height = 256;
    let subject = make_image(sub_width, sub_height);
    let subject_view = GridView::from_slice(&subject, sub_width, sub_height).unwrap();

    let tpl_width = 32;
    let tpl_height = 32;
    let tpl_data = extract_patch(&subject, sub_width, 120, 100, tpl_width, tpl_height);
    let tpl_view = GridView::from_slice(&tpl_data, tpl_width, tpl_height).unwrap();

    c.bench_function("sad_scan_256x256_tpl32", |b| {
        b.iter(|| black_box(scan_full(subject_view, tpl_view, 20, Metric::Sad).unwrap()));
    });

    c.bench_function("ssd_scan_256x256_tpl32", |b| {
        b.iter(|| black_box(scan_full(subject_view, tpl_view, 20, Metric::Ssd).unwrap()));
    });

    #[cfg(feature = "rayon")]
    {
        use blockmatch::scan_full_par;

        c.bench_function("sad_scan_256x256_tpl32_parallel", |b| {
            b.iter(|| black_box(scan_full_par(subject_view, tpl_view, 20, Metric::Sad).unwrap()));
        });
    }
}

fn bench_downscale(c: &mut Criterion) {
    let width = 512;
    let height = 512;
    let image = make_image(width, height);
    let view = GridView::from_slice(&image, width, height).unwrap();

    c.bench_function("downscale_half_512x512", |b| {
        b.iter(|| black_box(downscale_half(view).unwrap()));
    });
}

criterion_group!(benches, bench_scan, bench_downscale);
criterion_main!(benches);
