fn main() {
    env_logger::init();

    if let Err(error) = mask_retouch::run_cli() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
