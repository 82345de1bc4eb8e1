use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use facewarp_face::{LandmarkSet, PresetKind, PresetPipeline, NUM_LANDMARKS};
use facewarp_image::{Image, Point};

fn face(width: f32, height: f32) -> LandmarkSet {
    let mut points = vec![Point::new(width / 2.0, height / 2.0); NUM_LANDMARKS];
    points[234] = Point::new(width * 0.1, height / 2.0);
    points[447] = Point::new(width * 0.9, height / 2.0);
    points[4] = Point::new(width / 2.0, height * 0.55);
    points[215] = Point::new(width * 0.28, height * 0.62);
    points[435] = Point::new(width * 0.72, height * 0.62);
    LandmarkSet::new(points).expect("468 landmarks")
}

fn bench_preset_cheek(c: &mut Criterion) {
    let mut group = c.benchmark_group("PresetCheek");
    let pipeline = PresetPipeline::builtin().expect("valid built-in presets");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image = Image::<u8, 4>::from_size_fn([*width, *height].into(), |x, y| {
            [(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255]
        });
        let landmarks = face(*width as f32, *height as f32);

        group.bench_with_input(
            BenchmarkId::new("two_step_pull", &parameter_string),
            &(&image, &landmarks),
            |b, (src, landmarks)| {
                b.iter(|| {
                    pipeline.apply(
                        black_box(src),
                        black_box(landmarks),
                        black_box(PresetKind::Cheek),
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_preset_cheek);
criterion_main!(benches);
