use std::process::Command;

use polycube_generator::dump::render_generation;
use polycube_generator::{known_count, validate_max_size, Generations};

#[test]
fn growth_alone_reproduces_known_counts_up_to_eight() {
    let mut generations = Generations::new();
    generations.grow_to(8, |_, _| {}, || {});
    for size in 1..=8u8 {
        assert_eq!(
            generations.count(size),
            known_count(size).map(|c| c as usize),
            "free polycube count mismatch at size {size}"
        );
    }
}

#[test]
fn size_three_dump_contains_the_straight_and_bent_triominoes() {
    let mut generations = Generations::new();
    generations.grow_to(3, |_, _| {}, || {});
    let shapes: Vec<_> = generations
        .shapes(3)
        .unwrap()
        .iter()
        .map(|s| (**s).clone())
        .collect();
    assert_eq!(shapes.len(), 2);

    let rendered = render_generation(&shapes);
    assert!(
        rendered.contains("111\n"),
        "expected the straight triomino's 3x1x1 rendering in:\n{rendered}"
    );
    assert!(
        rendered.contains("11\n01\n") || rendered.contains("11\n10\n"),
        "expected an L-triomino rendering in a 2x2x1 box in:\n{rendered}"
    );
}

#[test]
fn validate_max_size_rejects_zero() {
    assert!(validate_max_size(0).is_err());
}

#[test]
fn binary_reports_the_known_count_for_size_four() {
    let output = Command::new(env!("CARGO_BIN_EXE_polycube-generator"))
        .arg("4")
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(" 4: 8"), "stdout was:\n{stdout}");
}
