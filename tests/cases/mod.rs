use once_cell::sync::Lazy;

pub struct TestCase {
    pub name: &'static str,
    pub expr: &'static str,
    pub bindings: &'static [(char, i64)],
    pub expected: i64,
}

pub static TEST_CASES: Lazy<Vec<TestCase>> = Lazy::new(|| {
    vec![
        TestCase {
            name: "single_variable",
            expr: "x",
            bindings: &[('x', 42)],
            expected: 42,
        },
        TestCase {
            name: "simple_addition",
            expr: "a+b",
            bindings: &[('a', 5), ('b', 3)],
            expected: 8,
        },
        TestCase {
            name: "simple_subtraction",
            expr: "a-b",
            bindings: &[('a', 5), ('b', 3)],
            expected: 2,
        },
        TestCase {
            name: "left_to_right_fold",
            expr: "a+b-c",
            bindings: &[('a', 5), ('b', 3), ('c', 2)],
            expected: 6,
        },
        TestCase {
            name: "left_associative_subtraction",
            expr: "a-b-c",
            bindings: &[('a', 10), ('b', 1), ('c', 2)],
            expected: 7,
        },
        TestCase {
            name: "longer_chain",
            expr: "a+b+c+d-e",
            bindings: &[('a', 1), ('b', 2), ('c', 3), ('d', 4), ('e', 5)],
            expected: 5,
        },
        TestCase {
            name: "digit_identifiers",
            expr: "1+2",
            bindings: &[('1', 10), ('2', 20)],
            expected: 30,
        },
        TestCase {
            name: "repeated_identifier",
            expr: "a+a-a",
            bindings: &[('a', 4)],
            expected: 4,
        },
        TestCase {
            name: "negative_values",
            expr: "a+b",
            bindings: &[('a', -5), ('b', 2)],
            expected: -3,
        },
    ]
});
