//! Entry point for the `hgs` command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = hgs_cli::run() {
        eprintln!("hgs: {err}");
        std::process::exit(1);
    }
}
