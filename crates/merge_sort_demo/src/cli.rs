use clap::Parser;

const DEFAULT_INTS: [i64; 7] = [38, 27, 43, 3, 9, 82, 10];
#[allow(clippy::approx_constant)]
const DEFAULT_FLOATS: [f64; 6] = [2.5, -1.1, 3.14, 0.0, -5.5, 2.5];

/// Sorts an integer and a floating point sequence and prints them before and after.
#[derive(Debug, Parser)]
#[command(name = "merge-sort-demo", version, about)]
pub struct Cli {
    /// Integers to sort, comma separated (e.g. --ints=3,-1,2)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub ints: Option<Vec<i64>>,

    /// Floating point values to sort, comma separated (e.g. --floats=2.5,-0.5,NaN)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub floats: Option<Vec<f64>>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn ints(&self) -> Vec<i64> {
        self.ints.clone().unwrap_or_else(|| DEFAULT_INTS.to_vec())
    }

    pub fn floats(&self) -> Vec<f64> {
        self.floats.clone().unwrap_or_else(|| DEFAULT_FLOATS.to_vec())
    }

    pub fn default_log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
