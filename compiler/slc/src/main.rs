//! `simplelexer` - print the token stream of a SimpleLang expression.

use slc::config::USAGE;
use slc::driver::VERSION;
use slc::tracing_setup::init_tracing;
use slc::{run, Command};

fn main() {
    init_tracing();

    let command = match Command::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(e.exit_code());
        }
    };

    match command {
        Command::Help => println!("{USAGE}"),
        Command::Version => println!("simplelexer {VERSION}"),
        Command::Lex(config) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            if let Err(e) = run(&config, &mut out) {
                eprintln!("error: {e}");
                std::process::exit(e.exit_code());
            }
        }
    }
}
