use crate::stage::Stage;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// Prices that exercise the stage (may or may not trigger a change).
    fn samples(&self) -> &'static [f64] {
        &[0.0, 0.5, 1.0, 49.99, 100.0, 1_000_000.0]
    }

    /// Prices this configuration must pass through unchanged.
    fn should_pass_through(&self) -> &'static [f64] {
        &[]
    }

    /// Stages whose `needs_apply` is an always-run policy rather than a
    /// change predictor (the validating base stage) set this.
    fn skip_needs_apply_test(&self) -> bool {
        false
    }
}

/// Assert that a stage configuration satisfies every universal contract:
///
/// 1. `apply_is_deterministic` → same input, bit-identical output
/// 2. `needs_apply_is_accurate` → correctly predicts whether `apply` would change the price
/// 3. `passes_through_unchanged` → declared pass-through prices come back untouched
/// 4. `describe_is_stable` → non-empty and identical across calls
/// 5. `survives_extreme_prices` → no panic on zero, subnormal, or huge inputs
///
/// Every stage configuration shipped by this crate must pass. Failure of
/// any contract is a critical bug.
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        let stage = &$stage;
        $crate::testing::stage_contract::apply_is_deterministic(stage);
        $crate::testing::stage_contract::needs_apply_is_accurate(stage);
        $crate::testing::stage_contract::passes_through_unchanged(stage);
        $crate::testing::stage_contract::describe_is_stable(stage);
        $crate::testing::stage_contract::survives_extreme_prices(stage);
    };
}

/// Generate one `#[test]` per stage configuration, named after it:
///
/// ```ignore
/// stage_contract_suite! {
///     default_tax: TaxCalculator::default(),
///     zero_tax: TaxCalculator::new(0.0).unwrap(),
/// }
/// ```
#[macro_export]
macro_rules! stage_contract_suite {
    ($($name:ident: $stage:expr),+ $(,)?) => {
        paste::paste! {
            $(
                #[test]
                fn [<$name _satisfies_stage_contract>]() {
                    $crate::assert_stage_contract!($stage);
                }
            )+
        }
    };
}

// ============================================================================
// Universal contract tests
// ============================================================================

#[cfg(test)]
pub fn apply_is_deterministic<S: StageTestConfig>(stage: &S) {
    for &price in stage.samples() {
        let once = stage.apply(price).expect("apply errored");
        let twice = stage.apply(price).expect("apply errored");
        assert_eq!(
            once.to_bits(),
            twice.to_bits(),
            "apply() not bit-for-bit deterministic for stage `{}` on {price}",
            stage.name()
        );
    }
}

#[cfg(test)]
pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: &S) {
    if stage.skip_needs_apply_test() {
        return;
    }
    for &price in stage.samples() {
        let predicted = stage.needs_apply(price);
        let output = stage.apply(price).expect("apply errored");
        let actually_changes = output != price;
        assert_eq!(
            predicted,
            actually_changes,
            "needs_apply() mismatch for stage `{}` on {price}\n\
             predicted: {predicted}\n\
             actual   : {actually_changes} (output = {output})",
            stage.name()
        );
    }
}

#[cfg(test)]
pub fn passes_through_unchanged<S: StageTestConfig>(stage: &S) {
    for &price in stage.should_pass_through() {
        let output = stage.apply(price).expect("apply errored");
        assert_eq!(
            output,
            price,
            "pass-through violated for stage `{}` on {price}",
            stage.name()
        );
    }
}

#[cfg(test)]
pub fn describe_is_stable<S: StageTestConfig>(stage: &S) {
    let first = stage.describe();
    assert!(
        !first.is_empty(),
        "describe() returned an empty string for stage `{}`",
        stage.name()
    );
    assert_eq!(
        first,
        stage.describe(),
        "describe() unstable across calls for stage `{}`",
        stage.name()
    );
}

#[cfg(test)]
pub fn survives_extreme_prices<S: StageTestConfig>(stage: &S) {
    for &price in &[0.0, f64::MIN_POSITIVE, 1e12, f64::MAX] {
        let _ = stage.needs_apply(price);
        let _ = stage.apply(price);
    }
}
