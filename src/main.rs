fn main() {
    if let Err(e) = robostat::cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
