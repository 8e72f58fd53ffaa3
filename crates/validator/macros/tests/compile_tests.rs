//! Compile-time tests for `#[derive(Record)]`.

#[test]
fn record_derive() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/record_pass.rs");
}

#[test]
fn record_derive_fail() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/record_fail.rs");
}

#[test]
fn generic_record_derive() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/generic_pass.rs");
}
