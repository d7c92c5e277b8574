//! Golden renders of the fixture records through the library API.

mod common;

use common::{fixture_path, read_fixture};
use rpmspec_writer::{load_record, parse_record, render_spec, render_spec_with};

#[test]
fn hello_record_matches_golden_spec() {
    let record = load_record(&fixture_path("hello.json")).expect("load hello record");
    assert_eq!(render_spec(&record), read_fixture("hello.spec"));
}

#[test]
fn minimal_record_renders_end_to_end_example() {
    let record = parse_record(&read_fixture("minimal.json")).expect("parse minimal record");
    let text = render_spec_with(&record, |result| result.expect("render succeeds"));
    assert_eq!(
        text,
        "Name: foo\nVersion: 1.0\nRelease: 1\nRequires: bar\n\n%build\nmake"
    );
}

#[test]
fn record_is_unchanged_by_rendering() {
    let record = load_record(&fixture_path("hello.json")).expect("load hello record");
    let before = record.clone();
    let first = render_spec(&record);
    let second = render_spec(&record);
    assert_eq!(record, before);
    assert_eq!(first, second);
}

#[test]
fn concurrent_renders_agree() {
    let record = load_record(&fixture_path("hello.json")).expect("load hello record");
    let expected = render_spec(&record);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| render_spec(&record)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("render thread"), expected);
        }
    });
}
