use criterion::{criterion_group, criterion_main, Criterion};
use newtype_kit::{Newtype, ParamVec, PartialIso, PathParam, PathPattern};
use std::hint::black_box;

#[derive(Newtype, Debug, Clone, Copy)]
#[newtype(eq, ord, hash)]
struct AnimalId(u64);

fn bench_newtype_iso(c: &mut Criterion) {
    let iso = PartialIso::<u64, AnimalId>::newtype();
    c.bench_function("newtype_iso_round_trip", |b| {
        b.iter(|| {
            let id = iso.apply(black_box(123)).and_then(|w| iso.unapply(w));
            black_box(id);
        })
    });
}

fn bench_typed_route(c: &mut Criterion) {
    let pattern = PathPattern::parse("/zoo/animals/{id}/toys/{toy_id}")
        .expect("failed to parse template");
    let id = PathParam::new(
        "id",
        PartialIso::<String, u64>::parsed().then(PartialIso::<u64, AnimalId>::newtype()),
    );
    c.bench_function("typed_route_match", |b| {
        let test_paths = [
            "/zoo/animals/123/toys/456",
            "/zoo/animals/9/toys/x",
            "/zoo/animals/not-a-number/toys/1",
        ];
        b.iter(|| {
            for path in test_paths.iter() {
                let res = pattern.matches(path).map(|p| id.parse(&p));
                black_box(&res);
            }
        })
    });
    c.bench_function("typed_route_render", |b| {
        b.iter(|| {
            let mut params = ParamVec::new();
            if let Ok(pair) = id.print(AnimalId::from_raw(black_box(123))) {
                params.push(pair);
            }
            params.push(("toy_id".into(), "456".to_string()));
            black_box(pattern.render(&params))
        })
    });
}

criterion_group!(benches, bench_newtype_iso, bench_typed_route);
criterion_main!(benches);
