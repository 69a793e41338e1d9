#[allow(non_upper_case_globals)]
const add_ok: & ::unittest::_test_reexports::TestInfo = {
    #[allow(unused_imports)]
    use ::unittest::_test_reexports as __ut;

    fn add_ok(ctx: &mut TestContext<'_>) {
        expect_eq!(ctx, 4, 2 + 2);
    }

    fn __test_fn(
        ctx: &mut __ut::TestContext<'_>,
    ) -> __ut::Result<(), __ut::anyhow::Error> {
        __ut::Termination::into_result(add_ok(ctx))
    }

    &__ut::TestInfo::new(
        __ut::test_details!("AddOk", "Basic", "MathSuite"),
        __test_fn
    )
};

::unittest::__test_case! {
    #[allow(non_upper_case_globals)]
    static __TEST_CASE_add_ok: & ::unittest::_test_reexports::TestInfo = add_ok;
}
