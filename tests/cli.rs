use assert_cmd::Command;

fn parse_component(s: &str) -> f64 {
    s.parse()
        .unwrap_or_else(|e| panic!("{s:?} is not a number: {e}"))
}

/// The unit circle has all of its energy in bin 1, so bin 0 is zero up to rounding.
#[test]
fn fft_prints_first_bin() {
    let output = Command::cargo_bin("fft").unwrap().assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "unexpected output: {stdout:?}");

    let rest = lines[0].strip_prefix("FFT[0] = ").unwrap();
    let (re, im) = rest.strip_suffix('i').unwrap().split_once(" + ").unwrap();
    for part in [re, im] {
        assert_eq!(part.split_once('.').unwrap().1.len(), 6);
        assert_eq!(parse_component(part).abs(), 0.0);
    }
}
