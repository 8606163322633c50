//! Group law and map benchmarks on named curves

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use ecmodels::{
    EllCurve, Isogeny,
    ecfield::{BigUint, Field},
    isogeny, map::Edwards25519ToCurve25519, named,
};
use std::hint::black_box;

fn test_scalar() -> BigUint {
    BigUint::parse_bytes(
        b"4c7fd1b4f48e3f06a1f2e0b5d5d8a5c0b2d9c0e1f4a3b2c1d0e9f8a7b6c5d4e3",
        16,
    )
    .unwrap()
}

fn bench_field<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let f = named::field25519().unwrap();
    let x = f.parse("0x1234567890abcdef1234567890abcdef").unwrap();
    let y = f.sqr(&x);
    group.bench_function("fp25519 mul", |b| b.iter(|| f.mul(black_box(&x), black_box(&y))));
    group.bench_function("fp25519 inv", |b| b.iter(|| f.inv(black_box(&x))));
    group.bench_function("fp25519 sqrt", |b| b.iter(|| f.sqrt(black_box(&y))));
}

fn bench_point_ops<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let e = named::secp256k1().unwrap();
    let g = named::secp256k1_generator().unwrap();
    let h = e.double(&g);
    let k = test_scalar();

    group.bench_function("secp256k1 add", |b| b.iter(|| e.add(black_box(&g), black_box(&h))));
    group.bench_function("secp256k1 double", |b| b.iter(|| e.double(black_box(&g))));
    group.bench_function("secp256k1 scalar_mult", |b| {
        b.iter(|| e.scalar_mult(black_box(&g), black_box(&k)))
    });

    let ed = named::edwards25519().unwrap();
    let eg = named::edwards25519_generator().unwrap();
    group.bench_function("edwards25519 add", |b| {
        b.iter(|| ed.add(black_box(&eg), black_box(&eg)))
    });
}

fn bench_maps<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let iso = isogeny::secp256k1_3_isogeny().unwrap();
    let e = iso.domain();
    let f = e.field();
    let x = f.elt(5);
    let y = f.sqrt(&e.eval_rhs(&x));
    if bool::from(y.is_some()) {
        let p = e.new_point(x, y.unwrap()).unwrap();
        group.bench_function("secp256k1 3-isogeny", |b| b.iter(|| iso.push(black_box(&p))));
    }

    let map = Edwards25519ToCurve25519::new().unwrap();
    let g = named::edwards25519_generator().unwrap();
    group.bench_function("edwards25519 to curve25519", |b| {
        b.iter(|| map.push(black_box(&g)))
    });
}

fn bench_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecmodels");
    bench_field(&mut group);
    bench_point_ops(&mut group);
    bench_maps(&mut group);
    group.finish();
}

criterion_group!(benches, bench_group);
criterion_main!(benches);
