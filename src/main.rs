fn main() {
    specdocs::logging::init();

    if let Err(err) = specdocs::cli::run_cli() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
