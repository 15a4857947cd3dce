use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    yttop_lib::logging::init_tracing();
    yttop_lib::run().await
}
