#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// Strips ANSI colors from every line the tool prints.
    pub no_color: bool,

    /// Shows debug events, such as the reason a lookup failed.
    ///
    /// `RUST_LOG` takes precedence when it is set.
    pub verbose: bool,
}
