//! Fixtures, builders and helpers shared by unit tests.

pub mod fixtures;
pub mod logging;

#[cfg(test)]
pub mod arbitrary;

/// One row of a table-driven test.
#[derive(Debug, Clone)]
pub struct TestCase<I, E> {
    pub name: &'static str,
    pub input: I,
    pub expected: E,
}

/// Run `check` over every row, naming the failing row in the assertion.
pub fn run_table_tests<I, E, F>(cases: Vec<TestCase<I, E>>, check: F)
where
    I: std::fmt::Debug,
    E: std::fmt::Debug + PartialEq,
    F: Fn(I) -> E,
{
    let total = cases.len();
    for (index, case) in cases.into_iter().enumerate() {
        println!("[CASE {}/{total}] {} <- {:?}", index + 1, case.name, case.input);
        let actual = check(case.input);
        assert_eq!(actual, case.expected, "case '{}' failed", case.name);
    }
}
