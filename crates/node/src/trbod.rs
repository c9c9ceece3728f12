fn main() {
    if let Err(err) = trbod::run_entry() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
