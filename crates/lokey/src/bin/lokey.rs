fn main() {
    if let Err(err) = lokey::run() {
        eprintln!("{}", lokey::format_error(&err));
        std::process::exit(1);
    }
}
