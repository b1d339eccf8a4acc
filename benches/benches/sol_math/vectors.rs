use criterion::{black_box, criterion_group, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sol_math::{convert, Vec2, Vec3, Vec4};

criterion_group!(benches, norm, cross, rotate);

fn random_vec3(rng: &mut ChaCha8Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
    )
}

fn norm(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let v3: Vec<Vec3> = (0..1024).map(|_| random_vec3(&mut rng)).collect();
    let v4: Vec<Vec4> = v3.iter().map(|v| v.extend(1.0)).collect();

    c.bench_function("norm_vec3", |b| {
        b.iter(|| {
            for v in &v3 {
                black_box(black_box(*v).norm());
            }
        });
    });
    c.bench_function("norm_vec4", |b| {
        b.iter(|| {
            for v in &v4 {
                black_box(black_box(*v).norm());
            }
        });
    });
}

fn cross(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let pairs: Vec<(Vec3, Vec3)> = (0..1024)
        .map(|_| (random_vec3(&mut rng), random_vec3(&mut rng)))
        .collect();

    c.bench_function("cross_vec3", |b| {
        b.iter(|| {
            for &(l, r) in &pairs {
                black_box(black_box(l).cross(black_box(r)));
            }
        });
    });
}

fn rotate(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let points: Vec<Vec3> = (0..1024).map(|_| random_vec3(&mut rng)).collect();
    let q = convert::axis_to_quat(Vec3::new(1.0, 1.0, 0.0).norm().extend(0.75));

    c.bench_function("rot_vec3", |b| {
        b.iter(|| {
            for p in &points {
                black_box(black_box(*p).rot(black_box(q)));
            }
        });
    });

    let flat: Vec<Vec2> = points.iter().map(|p| p.truncate()).collect();
    c.bench_function("rot_vec2", |b| {
        b.iter(|| {
            for p in &flat {
                black_box(black_box(*p).rot(black_box(0.75)));
            }
        });
    });
}
