use criterion::{black_box, criterion_group, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sol_math::backend::{Looped, Portable, VectorOps};
use sol_math::{Scalar, Vec2, Vec3, Vec4};

criterion_group!(benches, add, mul, div);

const COUNT: usize = 4096;

fn operands<V: From<[Scalar; N]>, const N: usize>() -> Vec<(V, V)> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (0..COUNT)
        .map(|_| {
            let a: [Scalar; N] = core::array::from_fn(|_| rng.gen_range(1.0..100.0));
            let b: [Scalar; N] = core::array::from_fn(|_| rng.gen_range(1.0..100.0));
            (V::from(a), V::from(b))
        })
        .collect()
}

fn run<V: Copy>(c: &mut Criterion, group_name: &str, id: &str, values: &[(V, V)], op: fn(V, V) -> V) {
    let mut group = c.benchmark_group(group_name);
    group.bench_with_input(BenchmarkId::new(id, values.len()), values, |b, values| {
        b.iter(|| {
            for &(l, r) in values {
                black_box(op(black_box(l), black_box(r)));
            }
        });
    });
    group.finish();
}

macro_rules! bench_tiers {
    ($c:ident, $group:literal, $op:ident) => {{
        let v2 = operands::<Vec2, 2>();
        let v3 = operands::<Vec3, 3>();
        let v4 = operands::<Vec4, 4>();

        run($c, concat!($group, "_vec2"), "portable", &v2, <Portable as VectorOps<Vec2>>::$op);
        run($c, concat!($group, "_vec2"), "looped", &v2, <Looped as VectorOps<Vec2>>::$op);
        run($c, concat!($group, "_vec3"), "portable", &v3, <Portable as VectorOps<Vec3>>::$op);
        run($c, concat!($group, "_vec3"), "looped", &v3, <Looped as VectorOps<Vec3>>::$op);
        run($c, concat!($group, "_vec4"), "portable", &v4, <Portable as VectorOps<Vec4>>::$op);
        run($c, concat!($group, "_vec4"), "looped", &v4, <Looped as VectorOps<Vec4>>::$op);

        #[cfg(any(
            all(
                any(target_arch = "x86", target_arch = "x86_64"),
                target_feature = "sse2"
            ),
            all(target_arch = "aarch64", target_feature = "neon"),
        ))]
        {
            use sol_math::backend::Native;
            run($c, concat!($group, "_vec2"), "native", &v2, <Native as VectorOps<Vec2>>::$op);
            run($c, concat!($group, "_vec3"), "native", &v3, <Native as VectorOps<Vec3>>::$op);
            run($c, concat!($group, "_vec4"), "native", &v4, <Native as VectorOps<Vec4>>::$op);
        }
    }};
}

fn add(c: &mut Criterion) {
    bench_tiers!(c, "add", add);
}

fn mul(c: &mut Criterion) {
    bench_tiers!(c, "mul", mul);
}

fn div(c: &mut Criterion) {
    bench_tiers!(c, "div", div);
}
