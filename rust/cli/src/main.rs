fn main() {
    setgame_cli::logging::init_logging();
    let code = setgame_cli::run(
        std::env::args(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    std::process::exit(code);
}
