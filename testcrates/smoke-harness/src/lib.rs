/// Sum of the integers in `1..=n`.
pub fn triangular(n: u32) -> u32 {
    n * (n + 1) / 2
}

#[cfg(test)]
unittest::test_harness!();
