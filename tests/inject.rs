use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use fndi::{callable, inject, Func, InjectError, Injectable, Provide, Providers, Value};
use rand::seq::SliceRandom;

#[derive(Clone, Debug, PartialEq)]
struct Provider1;

#[derive(Clone)]
struct Unprovided;

trait Iface: Send + Sync {
    fn foo(&self) -> &'static str;
}

#[derive(Clone, Provide)]
#[provide(Iface)]
struct Provider;

impl Iface for Provider {
    fn foo(&self) -> &'static str {
        "provider"
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Rank(usize);

fn counter() -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    (calls.clone(), calls)
}

#[test]
fn inject_concrete() {
    let (calls, seen) = counter();
    let f = callable(move |_p1: Provider1| {
        calls.fetch_add(1, Ordering::SeqCst);
    });

    let results = inject(&f, &[Value::new(Provider1)]).unwrap();

    assert!(results.is_empty());
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[test]
fn inject_interface_provider() {
    let (calls, seen) = counter();
    let f = callable(move |p: Arc<dyn Iface>| {
        calls.fetch_add(1, Ordering::SeqCst);
        (p.foo(),)
    });

    let providers = [Value::new(Arc::new(Provider) as Arc<dyn Iface>)];
    let results = inject(&f, &providers).unwrap();

    assert_eq!(results[0].downcast_ref::<&str>(), Some(&"provider"));
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[test]
fn inject_interface_through_view() {
    let f = callable(|p: Arc<dyn Iface>| (p.foo(),));

    let results = inject(&f, &Providers::new().with_provided(Provider)).unwrap();
    assert_eq!(results[0].downcast_ref::<&str>(), Some(&"provider"));

    // A bare value has no view to the interface
    let err = inject(&f, &[Value::new(Provider)]).unwrap_err();
    assert!(matches!(err, InjectError::MissingProvider { index: 0, .. }));
}

#[test]
fn inject_nested_pointers() {
    let f = callable(|p: Arc<Box<Arc<Provider1>>>| ((***p).clone(),));

    let providers = [
        Value::new(Arc::new(Provider1)),
        Value::new(Arc::new(Box::new(Arc::new(Provider1)))),
    ];
    let results = inject(&f, &providers).unwrap();

    assert_eq!(results[0].downcast_ref::<Provider1>(), Some(&Provider1));
}

#[test]
fn missing_provider_never_calls() {
    let (calls, seen) = counter();
    let h = callable(move |_p: Unprovided| {
        calls.fetch_add(1, Ordering::SeqCst);
    });

    let err = inject(&h, &[]).unwrap_err();

    match err {
        InjectError::MissingProvider {
            callable: name,
            index,
            parameter,
        } => {
            assert_eq!(index, 0);
            assert!(parameter.ends_with("Unprovided"));
            assert!(name.contains("missing_provider_never_calls"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(seen.load(Ordering::SeqCst), 0);
}

#[test]
fn missing_provider_reports_first_failing_index() {
    let (calls, seen) = counter();
    let f = callable(move |_a: Provider1, _b: Unprovided, _c: u32| {
        calls.fetch_add(1, Ordering::SeqCst);
    });

    let err = inject(&f, &[Value::new(Provider1)]).unwrap_err();

    assert!(matches!(err, InjectError::MissingProvider { index: 1, .. }));
    assert!(err.to_string().contains("for parameter 1 of"));
    assert_eq!(seen.load(Ordering::SeqCst), 0);
}

#[test]
fn first_provider_wins() {
    let f = callable(|rank: Rank| (rank,));

    let providers = [Value::new(Rank(0)), Value::new(Rank(1)), Value::new(Rank(2))];
    let results = inject(&f, &providers).unwrap();

    assert_eq!(results[0].downcast_ref::<Rank>(), Some(&Rank(0)));
}

#[test]
fn first_provider_wins_in_any_order() {
    let f = callable(|rank: Rank, _unrelated: Provider1| (rank,));
    let mut rng = rand::thread_rng();

    for _ in 0..32 {
        let mut providers: Vec<Value> = (0..8).map(|i| Value::new(Rank(i))).collect();
        providers.push(Value::new(Provider1));
        providers.shuffle(&mut rng);

        let first = providers
            .iter()
            .find_map(|value| value.downcast_ref::<Rank>().cloned())
            .unwrap();

        let results = inject(&f, &providers).unwrap();
        assert_eq!(results[0].downcast_ref::<Rank>(), Some(&first));
    }
}

#[test]
fn arguments_follow_parameter_order() {
    let f = callable(|a: u8, b: &'static str, c: Rank| (format!("{a}-{b}-{}", c.0),));

    let providers = Providers::new().with(Rank(3)).with("two").with(1_u8);
    let results = inject(&f, &providers).unwrap();

    assert_eq!(results[0].downcast_ref::<String>().unwrap(), "1-two-3");
}

#[test]
fn returned_errors_are_plain_values() {
    #[derive(Debug, thiserror::Error)]
    #[error("handler failed")]
    struct HandlerError;

    let f = callable(|| (7_i32, Err::<(), _>(HandlerError)));

    let results = inject(&f, &[]).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].downcast_ref::<i32>(), Some(&7));
    assert!(results[1]
        .downcast_ref::<Result<(), HandlerError>>()
        .unwrap()
        .is_err());
}

#[test]
fn not_callable() {
    let err = inject(&Value::new(String::from("handler")), &[]).unwrap_err();

    assert!(matches!(err, InjectError::NotCallable { found } if found.ends_with("String")));
}

#[test]
fn typed_call_keeps_output_type() {
    let add = |a: u32, b: Rank| (a + b.0 as u32,);

    let (sum,) = add
        .call_injected(&[Value::new(Rank(2)), Value::new(40_u32)])
        .unwrap();

    assert_eq!(sum, 42);
}

#[test]
fn func_can_be_called_repeatedly_and_shared() {
    let func = Func::new(|rank: Rank| (rank.0 * 2,));
    let value = Value::from(func.clone());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let value = value.clone();
            std::thread::spawn(move || {
                let results = inject(&value, &[Value::new(Rank(i))]).unwrap();
                *results[0].downcast_ref::<usize>().unwrap()
            })
        })
        .collect();

    let doubled: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(doubled, [0, 2, 4, 6]);
    assert_eq!(func.parameters().len(), 1);
}

#[test]
fn erased_values_are_not_wrapped_twice() {
    let f = callable(|n: u32| (n,));

    let results = inject(&f, &Providers::new().with(Value::new(5_u32))).unwrap();
    assert_eq!(results[0].downcast_ref::<u32>(), Some(&5));

    let nothing = Value::new(callable(|| ()));
    assert!(inject(&nothing, &[]).unwrap().is_empty());
}

#[test]
#[should_panic(expected = "handler exploded")]
fn panics_in_the_callable_propagate() {
    let f = callable(|_p: Provider1| -> () { panic!("handler exploded") });

    let _ = inject(&f, &[Value::new(Provider1)]);
}
