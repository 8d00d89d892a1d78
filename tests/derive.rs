#[test]
fn tests() {
    let tests = trybuild::TestCases::new();
    tests.pass("tests/ui/string_choices.rs");
    tests.pass("tests/ui/number_choices.rs");
}
