use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use cifar_aug_image::{CifarImage, CIFAR_IMAGE_SIZE};
use cifar_aug_imgproc::{
    augment::{apply_op, AugmentOp},
    RngSource,
};

fn bench_augment(c: &mut Criterion) {
    let mut group = c.benchmark_group("Augment");

    let data = (0..3 * 32 * 32).map(|i| (i % 256) as u8).collect();
    let image = CifarImage::new(CIFAR_IMAGE_SIZE, data).unwrap();

    group.throughput(criterion::Throughput::Elements(1));

    for op in AugmentOp::ALL {
        let mut rng = RngSource::seeded(0);
        group.bench_with_input(BenchmarkId::from_parameter(op), &image, |b, i| {
            b.iter(|| black_box(apply_op(op, black_box(i), &mut rng)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_augment);
criterion_main!(benches);
