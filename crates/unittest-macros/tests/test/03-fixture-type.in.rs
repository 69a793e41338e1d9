fn fixture_bound(fixture: &mut fixtures::Basic, ctx: &mut TestContext<'_>) {
    expect_eq!(ctx, 1, fixture.value);
}
