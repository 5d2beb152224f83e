use core::convert::Infallible;
use criterion::{criterion_group, criterion_main, Criterion};
use fault::{Cause, Constructible, ConstructorResolver, Constructors, Fault, Object};
use std::{hint::black_box, io, sync::Arc};

#[derive(thiserror::Error, Debug)]
#[error("{message}")]
struct Direct {
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl Constructible for Direct {
    fn constructors() -> Constructors<Self> {
        Constructors::new()
            .constructor(|message: String| Ok::<_, Infallible>(Self { message, cause: None }))
            .constructor(|message: String, cause: Cause| {
                Ok::<_, Infallible>(Self {
                    message,
                    cause: Some(cause),
                })
            })
    }
}

#[derive(thiserror::Error, Debug)]
#[error("fallback")]
struct Fallback(#[allow(dead_code)] Object);

impl Constructible for Fallback {
    fn constructors() -> Constructors<Self> {
        Constructors::new().constructor(|value: Object| Ok::<_, Infallible>(Self(value)))
    }
}

fn build_benchmark(c: &mut Criterion) {
    let direct = Fault::<Direct>::new("message");
    let fallback = Fault::<Fallback>::new("message");
    let cause: Cause = Arc::new(io::Error::new(io::ErrorKind::Other, "cause"));

    c.bench_function("build_string", |b| b.iter(|| black_box(direct.build().unwrap())))
        .bench_function("build_object_fallback", |b| b.iter(|| black_box(fallback.build().unwrap())))
        .bench_function("build_with_cause", |b| {
            b.iter(|| black_box(direct.build_with_cause(cause.clone()).unwrap()))
        })
        .bench_function("resolver_not_found", |b| {
            let resolver = ConstructorResolver::<Direct>::using().try_parameters::<(u8,)>();
            b.iter(|| black_box(resolver.create((1_u8,)).is_err()))
        });
}

fn validate_benchmark(c: &mut Criterion) {
    let fault = Fault::<Direct>::new("message");
    let error = fault.build().unwrap();

    c.bench_function("validate", |b| b.iter(|| black_box(fault.validate_to(&error, &mut io::sink()).is_ok())));
}

criterion_group!(benches, build_benchmark, validate_benchmark);
criterion_main!(benches);
