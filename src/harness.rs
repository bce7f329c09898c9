//! Plumbing shared by the benchmark binaries: logging setup and wall-clock timing.

use std::time::Instant;

use env_logger::Env;

/// Installs `env_logger` on stderr, at `warn` unless `RUST_LOG` says otherwise.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .try_init();
}

/// Runs `f`, logs its wall time under `name` at info level, and returns its result.
pub fn timed<T, F: FnOnce() -> T>(name: &str, f: F) -> T {
    let now = Instant::now();
    let result = f();
    let elapsed = pretty_print_int(now.elapsed().as_micros());
    log::info!("{name}: time elapsed: {elapsed} us");
    result
}

/// Formats an integer with `,` as the thousands separator
pub fn pretty_print_int(i: u128) -> String {
    let digits = i.to_string();
    let mut res = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            res.push(',');
        }
        res.push(ch);
    }
    res
}
