#[allow(non_upper_case_globals)]
const fixture_bound: & ::unittest::_test_reexports::TestInfo = {
    #[allow(unused_imports)]
    use ::unittest::_test_reexports as __ut;

    fn fixture_bound(fixture: &mut fixtures::Basic, ctx: &mut TestContext<'_>) {
        expect_eq!(ctx, 1, fixture.value);
    }

    fn __test_fn(
        ctx: &mut __ut::TestContext<'_>,
    ) -> __ut::Result<(), __ut::anyhow::Error> {
        __ut::run_with_fixture::<fixtures::Basic, _>(ctx, fixture_bound)
    }

    &__ut::TestInfo::new(
        __ut::test_details!("fixture_bound", "Basic", "MathSuite"),
        __test_fn
    )
};

::unittest::__test_case! {
    #[allow(non_upper_case_globals)]
    static __TEST_CASE_fixture_bound: & ::unittest::_test_reexports::TestInfo = fixture_bound;
}
