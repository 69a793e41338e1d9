#[allow(non_upper_case_globals)]
const plain: & ::unittest::_test_reexports::TestInfo = {
    #[allow(unused_imports)]
    use ::unittest::_test_reexports as __ut;

    fn plain(ctx: &mut TestContext<'_>) {
        expect_true!(ctx, true);
    }

    fn __test_fn(
        ctx: &mut __ut::TestContext<'_>,
    ) -> __ut::Result<(), __ut::anyhow::Error> {
        __ut::Termination::into_result(plain(ctx))
    }

    &__ut::TestInfo::new(__ut::test_details!("plain", "", ""), __test_fn)
};

::unittest::__test_case! {
    #[allow(non_upper_case_globals)]
    static __TEST_CASE_plain: & ::unittest::_test_reexports::TestInfo = plain;
}
