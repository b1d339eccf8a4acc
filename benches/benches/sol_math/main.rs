use criterion::criterion_main;

mod backends;
mod vectors;

criterion_main!(backends::benches, vectors::benches);
