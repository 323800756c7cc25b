//! `netcopy [OPTIONS] [CLIP_NAME]`, short for `netclip copy`.

use netclip::cli;

fn main() {
    cli::setup::init_tracing();
    std::process::exit(cli::run_command(
        cli::setup::COPY,
        std::env::args_os().skip(1),
    ));
}
