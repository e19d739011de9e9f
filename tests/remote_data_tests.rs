//! Integration tests for the `RemoteData` constructors and combinators.

use remote_data::remote::{
    self, Handlers, RemoteData, UnresolvedError, Variant, failure, is_failure, is_loading,
    is_not_asked, is_success, loading, not_asked, success,
};
use rstest::rstest;

type Remote<A> = RemoteData<String, A>;

fn increment(x: i32) -> i32 {
    x + 1
}

fn to_text(x: i32) -> String {
    x.to_string()
}

// =============================================================================
// Constructors and Predicates
// =============================================================================

#[rstest]
#[case(not_asked(), Variant::NotAsked)]
#[case(loading(), Variant::Loading)]
#[case(failure("failed".to_string()), Variant::Failure)]
#[case(success(1), Variant::Success)]
fn exactly_one_predicate_holds(#[case] value: Remote<i32>, #[case] variant: Variant) {
    let flags = [
        is_not_asked(&value),
        is_loading(&value),
        is_failure(&value),
        is_success(&value),
    ];

    assert_eq!(flags.iter().filter(|flag| **flag).count(), 1);
    assert_eq!(value.variant(), variant);
    let index = Variant::ALL.iter().position(|v| *v == variant).unwrap();
    assert!(flags[index]);
}

#[rstest]
fn methods_and_free_predicates_agree() {
    for value in [not_asked(), loading(), failure(1), success(2)] {
        let value: RemoteData<i32, i32> = value;
        assert_eq!(value.is_not_asked(), is_not_asked(&value));
        assert_eq!(value.is_loading(), is_loading(&value));
        assert_eq!(value.is_failure(), is_failure(&value));
        assert_eq!(value.is_success(), is_success(&value));
    }
}

// =============================================================================
// fold
// =============================================================================

#[rstest]
#[case(not_asked(), "not asked")]
#[case(loading(), "loading")]
#[case(failure(1), "failed")]
#[case(success(1), "success")]
fn fold_dispatches_on_variant(#[case] value: RemoteData<i32, i32>, #[case] expected: &str) {
    let reducer = remote::fold(Handlers {
        on_not_asked: || "not asked",
        on_loading: || "loading",
        on_failure: |_: i32| "failed",
        on_success: |_: i32| "success",
    });

    assert_eq!(reducer(value), expected);
    assert_eq!(
        value.fold(|| "not asked", || "loading", |_| "failed", |_| "success"),
        expected
    );
}

#[rstest]
fn fold_passes_payload_to_handler() {
    let value: Remote<i32> = success(41);
    assert_eq!(value.fold(|| 0, || 0, |_| 0, increment), 42);

    let value: Remote<i32> = failure("timeout".to_string());
    assert_eq!(value.fold(String::new, String::new, |e| e, to_text), "timeout");
}

// =============================================================================
// map / bimap / bind
// =============================================================================

#[rstest]
#[case(not_asked(), not_asked())]
#[case(loading(), loading())]
#[case(failure("failed".to_string()), failure("failed".to_string()))]
#[case(success(1), success("2".to_string()))]
fn map_transforms_only_success(#[case] value: Remote<i32>, #[case] expected: Remote<String>) {
    assert_eq!(value.map(|x| to_text(increment(x))), expected);
}

#[rstest]
#[case(not_asked(), not_asked())]
#[case(loading(), loading())]
#[case(failure(1), failure("1_".to_string()))]
#[case(success(1), success("2".to_string()))]
fn bimap_transforms_both_payloads(
    #[case] value: RemoteData<i32, i32>,
    #[case] expected: RemoteData<String, String>,
) {
    let result = value.bimap(|e| format!("{e}_"), |a| to_text(increment(a)));
    assert_eq!(result, expected);
}

#[rstest]
fn bind_short_circuits_on_failure() {
    let value: Remote<i32> = failure("x".to_string());
    let result = value.bind(|_| -> Remote<i32> { unreachable!("bind must skip Failure") });
    assert_eq!(result, failure("x".to_string()));
}

#[rstest]
#[case(not_asked())]
#[case(loading())]
fn bind_keeps_unresolved_states(#[case] value: Remote<i32>) {
    let expected = value.clone();
    assert_eq!(value.bind(|x| success(increment(x))), expected);
}

#[rstest]
fn bind_returns_inner_value_unwrapped() {
    let value: Remote<i32> = success(1);
    assert_eq!(value.clone().bind(|_| loading::<String, i32>()), loading());
    assert_eq!(
        value.bind(|x| failure::<String, i32>(format!("rejected {x}"))),
        failure("rejected 1".to_string())
    );
}

#[rstest]
fn fold_after_bind_end_to_end() {
    let render = remote::fold(Handlers::new(
        || "not asked".to_string(),
        || "loading".to_string(),
        |error: String| format!("failed: {error}"),
        |value: i32| format!("success: {value}"),
    ));
    let next = remote::bind(|x: i32| success(x + 1));

    assert_eq!(render(next(success(1))), "success: 2");
    assert_eq!(render(next(failure("x".to_string()))), "failed: x");
    assert_eq!(render(next(loading())), "loading");
}

// =============================================================================
// Extraction and Conversions
// =============================================================================

#[rstest]
fn extraction_helpers() {
    let value: Remote<i32> = success(3);
    assert_eq!(value.success_ref(), Some(&3));
    assert_eq!(value.clone().into_success(), Some(3));
    assert_eq!(value.clone().into_failure(), None);
    assert_eq!(value.with_default(0), 3);

    let value: Remote<i32> = failure("e".to_string());
    assert_eq!(value.failure_ref(), Some(&"e".to_string()));
    assert_eq!(value.clone().into_failure(), Some("e".to_string()));
    assert_eq!(value.with_default(0), 0);
}

#[rstest]
fn from_result() {
    let ok: Result<i32, String> = Ok(1);
    let err: Result<i32, String> = Err("e".to_string());

    assert_eq!(RemoteData::from(ok), success(1));
    assert_eq!(RemoteData::from(err), failure("e".to_string()));
}

#[rstest]
#[case(success(1), Ok(Ok(1)))]
#[case(failure("e".to_string()), Ok(Err("e".to_string())))]
#[case(loading(), Err(UnresolvedError { variant: Variant::Loading }))]
#[case(not_asked(), Err(UnresolvedError { variant: Variant::NotAsked }))]
fn try_into_result(
    #[case] value: Remote<i32>,
    #[case] expected: Result<Result<i32, String>, UnresolvedError>,
) {
    assert_eq!(Result::<i32, String>::try_from(value), expected);
}

// =============================================================================
// Concurrency
// =============================================================================

#[rstest]
fn curried_combinators_are_shareable_across_threads() {
    let double = remote::map(|x: i32| x * 2);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let double = &double;
                scope.spawn(move || double(success::<String, i32>(i)))
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let expected = i32::try_from(i).unwrap() * 2;
            assert_eq!(handle.join().unwrap(), success(expected));
        }
    });
}
