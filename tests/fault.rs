use anyhow::anyhow;
use core::convert::Infallible;
use fault::{
    Cause, Constructible, ConstructorResolver, Constructors, Fault, InstantiateErrorKind, Object, ResolveErrorKind, Streams,
    TypeInfo, ValidateErrorKind,
};
use parking_lot::Mutex;
use std::{error::Error, io, sync::Arc};

#[derive(thiserror::Error, Debug)]
#[error("{message}")]
struct IllegalState {
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl Constructible for IllegalState {
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
#[error("{message}")]
struct Unsupported {
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl Unsupported {
    fn message_of(value: Object) -> Result<String, anyhow::Error> {
        value
            .downcast::<String>()
            .map_err(|value| anyhow!("Unsupported message type {}", value.type_info()))
    }
}

impl Constructible for Unsupported {
    fn constructors() -> Constructors<Self> {
        Constructors::new()
            .constructor(|value: Object, cause: Cause| {
                Ok::<_, anyhow::Error>(Self {
                    message: Self::message_of(value)?,
                    cause: Some(cause),
                })
            })
            .constructor(|value: Object| {
                Ok::<_, anyhow::Error>(Self {
                    message: Self::message_of(value)?,
                    cause: None,
                })
            })
    }
}

fn sink() -> Arc<Mutex<Vec<u8>>> {
    Arc::new(Mutex::new(Vec::new()))
}

fn round_trip<E: Error + Constructible>(message: &str) {
    let fault = Fault::<E>::new(message);
    let cause: Cause = Arc::new(io::Error::new(io::ErrorKind::Other, "cause"));

    let plain = fault.build().unwrap();
    let with_cause = fault.build_with_cause(cause).unwrap();

    fault
        .validate_to(&plain, &mut io::sink())
        .and_then(|fault| fault.validate_to(&with_cause, &mut io::sink()))
        .unwrap();
    assert_eq!(with_cause.source().map(ToString::to_string).as_deref(), Some("cause"));
}

#[test]
fn test_build_and_validate_each_type() {
    round_trip::<IllegalState>("illegal state");
    round_trip::<Unsupported>("unsupported");
}

#[test]
fn test_object_constructor_rejects_other_arguments() {
    let err = ConstructorResolver::<Unsupported>::using()
        .try_parameters::<(Object,)>()
        .create((42_u8,))
        .err()
        .unwrap();

    assert!(matches!(
        err,
        ResolveErrorKind::Instantiation {
            source: InstantiateErrorKind::Custom(_),
            ..
        }
    ));
    assert_eq!(
        err.source().map(ToString::to_string),
        Some(format!("Unsupported message type {}", TypeInfo::of::<u8>()))
    );
}

#[test]
fn test_validate_cause_of_built_error() {
    let cause: Cause = Arc::new(Fault::<IllegalState>::new("root").build().unwrap());
    let outer = Fault::<Unsupported>::new("outer").build_with_cause(cause).unwrap();
    let boxed: Box<dyn Error + Send + Sync> = Box::new(outer);

    Fault::<Unsupported>::new("outer")
        .validate_to(boxed.as_ref(), &mut io::sink())
        .unwrap();
    Fault::<IllegalState>::new("root")
        .validate_to(boxed.source().unwrap(), &mut io::sink())
        .unwrap();
}

#[test]
fn test_build_then_validate_against_other_fault() {
    let err = sink();
    let streams = Streams::standard().with_err(err.clone());
    let built = Fault::<IllegalState>::new("first").build().unwrap();

    let validate_err = Fault::<Unsupported>::new("first").validate_with(&built, &streams).unwrap_err();

    assert_eq!(
        validate_err,
        ValidateErrorKind::IncorrectType {
            expected: TypeInfo::of::<Unsupported>(),
            actual: TypeInfo::of::<IllegalState>(),
        }
    );
    let trace = String::from_utf8(err.lock().clone()).unwrap();
    assert_eq!(trace, format!("{}: first\n", TypeInfo::of::<IllegalState>()));
}

#[test]
fn test_resolver_error_is_a_throwable() {
    let err = ConstructorResolver::<IllegalState>::using()
        .try_parameters::<(u8,)>()
        .create((1_u8,))
        .err()
        .unwrap();
    let expected = Fault::<ResolveErrorKind>::new(format!(
        "{} does not have expected constructor",
        TypeInfo::of::<IllegalState>()
    ));

    let mut trace = Vec::<u8>::new();
    expected.validate_to(&err, &mut trace).unwrap();

    assert!(trace.is_empty());
}

#[test]
fn test_print_and_display_agree() {
    let out = sink();
    let streams = Streams::standard().with_out(out.clone());
    let fault = Fault::<IllegalState>::new("shown");

    fault.print_with(&streams).unwrap();

    assert_eq!(String::from_utf8(out.lock().clone()).unwrap(), format!("{fault}\n"));
    assert_eq!(fault.to_string(), format!("({}) shown", TypeInfo::of::<IllegalState>()));
}
