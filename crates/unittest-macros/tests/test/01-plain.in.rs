fn plain(ctx: &mut TestContext<'_>) {
    expect_true!(ctx, true);
}
