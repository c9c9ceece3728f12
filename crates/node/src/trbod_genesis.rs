fn main() {
    if let Err(err) = trbod::genesis_tool::run_entry() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
