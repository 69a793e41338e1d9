/// Return values accepted from test bodies.
///
/// `()` always passes. `Result<(), E>` passes on `Ok`; an `Err` is recorded as a
/// failure of the test case.
pub trait Termination: sealed::Sealed {
    #[doc(hidden)] // private API.
    fn into_result(self) -> anyhow::Result<()>;
}

impl Termination for () {
    #[doc(hidden)]
    #[inline]
    fn into_result(self) -> anyhow::Result<()> {
        Ok(())
    }
}

impl<E> Termination for Result<(), E>
where
    E: Into<anyhow::Error>,
{
    #[doc(hidden)]
    #[inline]
    fn into_result(self) -> anyhow::Result<()> {
        self.map_err(Into::into)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for () {}

    impl<E> Sealed for Result<(), E> where E: Into<anyhow::Error> {}
}
