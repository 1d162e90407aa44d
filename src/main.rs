use euler_bench::core::config::BenchConfig;
use euler_bench::run_benchmark;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run_benchmark(&BenchConfig::default()) {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}
