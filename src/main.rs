use mailmuse::cli;
use mailmuse::logger;
use mailmuse::ui;

#[tokio::main]
async fn main() {
    if let Err(e) = logger::init() {
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    if let Err(e) = cli::main().await {
        ui::print_error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
