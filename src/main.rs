//! enumg CLI entry point

fn main() {
    // Logging is initialized by the CLI once the verbosity flag is known
    enumg::cli::run();
}
