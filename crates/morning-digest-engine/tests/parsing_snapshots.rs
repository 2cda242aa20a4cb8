use morning_digest_engine::{render_markdown, sample::SAMPLE_ANALYSIS};

#[test]
fn fixture_sample_digest() {
    assert_fixture("sample_digest");
}

#[test]
fn fixture_tables() {
    assert_fixture("tables");
}

#[test]
fn fixture_lists() {
    assert_fixture("lists");
}

/// The fixture copy of the sample digest must not drift from the built-in one.
#[test]
fn sample_fixture_matches_builtin_sample() {
    assert_eq!(read_fixture("sample_digest").trim_end(), SAMPLE_ANALYSIS);
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn assert_fixture(name: &str) {
    let md = read_fixture(name);
    let blocks = render_markdown(&md);
    insta::assert_debug_snapshot!(name, blocks);
}
