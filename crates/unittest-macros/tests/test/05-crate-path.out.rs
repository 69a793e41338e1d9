#[allow(non_upper_case_globals)]
const crate_path: &crate::_test_reexports::TestInfo = {
    #[allow(unused_imports)]
    use crate::_test_reexports as __ut;

    #[allow(unused_variables)]
    fn crate_path(ctx: &mut TestContext<'_>) {}

    fn __test_fn(
        ctx: &mut __ut::TestContext<'_>,
    ) -> __ut::Result<(), __ut::anyhow::Error> {
        __ut::Termination::into_result(crate_path(ctx))
    }

    &__ut::TestInfo::new(__ut::test_details!("crate_path", "", ""), __test_fn)
};

crate::__test_case! {
    #[allow(non_upper_case_globals)]
    static __TEST_CASE_crate_path: &crate::_test_reexports::TestInfo = crate_path;
}
