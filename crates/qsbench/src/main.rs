use anyhow::Result;
use clap::{Parser, ValueEnum};
use qsbench::{execute, BenchOptions, DEFAULT_SEED};
use qsbench_core::{SortStrategy, Variant, ARR_LEN, ITERATIONS};

/// qsbench — deterministic LCG + quicksort checksum microbenchmark.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Parameter-width variant
    #[arg(long, value_enum, default_value_t = VariantArg::A)]
    variant: VariantArg,

    /// Generator seed
    #[arg(long, env = "SEED", default_value_t = DEFAULT_SEED, allow_hyphen_values = true)]
    seed: i64,

    /// Working array length
    #[arg(long = "len", env = "ARR_LEN", default_value_t = ARR_LEN as i64, allow_hyphen_values = true)]
    arr_len: i64,

    /// Fill/sort rounds per run
    #[arg(long = "iter", env = "ITER", default_value_t = ITERATIONS as i64, allow_hyphen_values = true)]
    iterations: i64,

    /// How the sort recurses into sub-ranges
    #[arg(long, value_enum, default_value_t = StrategyArg::Recursive)]
    strategy: StrategyArg,

    /// Number of timed runs
    #[arg(long, default_value_t = 1)]
    repeat: u32,

    /// Fail unless the checksum equals this value
    #[arg(long)]
    expect: Option<u64>,

    /// Only print the checksum
    #[arg(long, short)]
    quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum VariantArg {
    /// 64-bit state, raw values
    A,
    /// 32-bit state and parameters, values mod 1000
    B,
    /// 64-bit state and parameters, values mod 1000
    C,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::A => Variant::A,
            VariantArg::B => Variant::B,
            VariantArg::C => Variant::C,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum StrategyArg {
    /// Call-stack recursion
    Recursive,
    /// Explicit work-list of index ranges
    WorkList,
}

impl From<StrategyArg> for SortStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Recursive => SortStrategy::Recursive,
            StrategyArg::WorkList => SortStrategy::WorkList,
        }
    }
}

impl Cli {
    fn options(&self) -> BenchOptions {
        BenchOptions {
            variant: self.variant.into(),
            seed: self.seed,
            arr_len: self.arr_len,
            iterations: self.iterations,
            strategy: self.strategy.into(),
            repeat: self.repeat,
            expect: self.expect,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = cli.options();

    if !cli.quiet {
        eprintln!(
            "qsbench: variant {:?}, seed {}, length {}, {} iterations, {} run(s)",
            options.variant, options.seed, options.arr_len, options.iterations, options.repeat
        );
    }

    let report = execute(&options)?;

    println!("{}", report.checksum);

    if !cli.quiet {
        eprintln!(
            "qsbench: {} run(s) in {:?} (mean {:?})",
            report.runs,
            report.total,
            report.mean()
        );
        if options.expect.is_some() {
            eprintln!("qsbench: checksum ok");
        }
    }
    Ok(())
}
