use netclip::cli;

fn main() {
    cli::setup::init_tracing();
    std::process::exit(cli::run(std::env::args_os().skip(1)));
}
