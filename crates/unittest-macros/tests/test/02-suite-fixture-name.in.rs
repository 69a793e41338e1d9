fn add_ok(ctx: &mut TestContext<'_>) {
    expect_eq!(ctx, 4, 2 + 2);
}
