#[unittest(crate = crate)]
#[allow(unused_variables)]
fn crate_path(ctx: &mut TestContext<'_>) {}
