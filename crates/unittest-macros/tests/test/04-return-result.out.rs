#[allow(non_upper_case_globals)]
const return_result: & ::unittest::_test_reexports::TestInfo = {
    #[allow(unused_imports)]
    use ::unittest::_test_reexports as __ut;

    fn return_result(_: &mut TestContext<'_>) -> std::io::Result<()>
    where
        std::io::Result<()>: __ut::Termination
    {
        Ok(())
    }

    fn __test_fn(
        ctx: &mut __ut::TestContext<'_>,
    ) -> __ut::Result<(), __ut::anyhow::Error> {
        __ut::Termination::into_result(return_result(ctx))
    }

    &__ut::TestInfo::new(__ut::test_details!("return_result", "", ""), __test_fn)
};

::unittest::__test_case! {
    #[allow(non_upper_case_globals)]
    static __TEST_CASE_return_result: & ::unittest::_test_reexports::TestInfo = return_result;
}
