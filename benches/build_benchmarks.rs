use criterion::{black_box, criterion_group, criterion_main, Criterion};

use meshbuild::{build, BuildRequest};

/// Build a grid of `n` x `n` quads as an indexed triangle-list request.
fn grid_buffers(n: u32) -> (Vec<f32>, Vec<i32>) {
    let mut positions = Vec::with_capacity(((n + 1) * (n + 1) * 2) as usize);
    for y in 0..=n {
        for x in 0..=n {
            positions.push(x as f32);
            positions.push(y as f32);
        }
    }

    let mut indices = Vec::with_capacity((n * n * 6) as usize);
    for y in 0..n {
        for x in 0..n {
            let current = (y * (n + 1) + x) as i32;
            let next = current + (n + 1) as i32;
            indices.extend_from_slice(&[current, next, current + 1]);
            indices.extend_from_slice(&[current + 1, next, next + 1]);
        }
    }

    (positions, indices)
}

fn bench_build_small(c: &mut Criterion) {
    let (positions, indices) = grid_buffers(8);
    c.bench_function("build_grid_8x8", |b| {
        b.iter(|| {
            build(black_box(&BuildRequest {
                mode: 0,
                positions: &positions,
                tex_coords: &[],
                colors: &[],
                indices: &indices,
            }))
        });
    });
}

fn bench_build_medium(c: &mut Criterion) {
    let (positions, indices) = grid_buffers(64);
    c.bench_function("build_grid_64x64", |b| {
        b.iter(|| {
            build(black_box(&BuildRequest {
                mode: 0,
                positions: &positions,
                tex_coords: &[],
                colors: &[],
                indices: &indices,
            }))
        });
    });
}

fn bench_build_full_attributes(c: &mut Criterion) {
    let (positions, indices) = grid_buffers(64);
    let tex_coords = positions.clone();
    let colors = vec![-1i32; positions.len() / 2];
    c.bench_function("build_grid_64x64_all_attributes", |b| {
        b.iter(|| {
            build(black_box(&BuildRequest {
                mode: 0,
                positions: &positions,
                tex_coords: &tex_coords,
                colors: &colors,
                indices: &indices,
            }))
        });
    });
}

criterion_group!(
    benches,
    bench_build_small,
    bench_build_medium,
    bench_build_full_attributes
);
criterion_main!(benches);
