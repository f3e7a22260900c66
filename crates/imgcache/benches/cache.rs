use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use imgcache::{Image, ImageCache};

fn bench_push_fits(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("push_no_eviction", |b| {
        let mut cache = ImageCache::new(u64::MAX);
        let mut counter = 0u64;
        b.iter(|| {
            let image = Image::new(format!("img_{}", counter), 1024);
            black_box(cache.push(image).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_push_evicting(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("push_one_eviction", |b| {
        // Full cache of equal-sized images, so every push evicts exactly one
        let mut cache = ImageCache::new(1024 * 1000);
        for i in 0..1000 {
            cache.push(Image::new(format!("warm_{}", i), 1024)).unwrap();
        }

        let mut counter = 0u64;
        b.iter(|| {
            let image = Image::new(format!("img_{}", counter), 1024);
            black_box(cache.push(image).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_repush(c: &mut Criterion) {
    let mut group = c.benchmark_group("repush");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("repush_cached", |b| {
        let mut cache = ImageCache::new(1024 * 100);
        let images: Vec<_> = (0..100)
            .map(|i| Image::new(format!("img_{}", i), 1024))
            .collect();
        for image in &images {
            cache.push(image.clone()).unwrap();
        }

        let mut counter = 0;
        b.iter(|| {
            black_box(cache.push(images[counter % 100].clone()).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push_fits, bench_push_evicting, bench_repush);
criterion_main!(benches);
