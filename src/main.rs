use std::time::Duration;

fn main() -> std::io::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(lander::run_with_config());
    // Stdin reads block a worker thread; don't wait on them at exit.
    runtime.shutdown_timeout(Duration::from_millis(100));
    result
}
