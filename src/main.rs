use std::io;

use clap::Parser;
use tiercalc::driver::{HELP, LICENCE, run_interactive, run_once};
use tiercalc::interpreter::session::Session;

/// tiercalc evaluates space-delimited arithmetic expressions tier by tier,
/// strictly left to right. Without an expression it starts an interactive
/// session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Show the licence notice and exit.
    #[arg(long, visible_alias = "license")]
    licence: bool,

    /// The expression to evaluate, e.g. "2 * (3 + 4)".
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    if args.licence {
        println!("{LICENCE}");
        return;
    }

    let status = match args.expression.as_deref() {
        Some("help") => {
            println!("{HELP}");
            Ok(0)
        },
        Some(expression) => run_once(expression, &mut io::stdout(), &mut io::stderr()),
        None => run_interactive(io::stdin().lock(),
                                &mut io::stdout(),
                                &mut io::stderr(),
                                &mut Session::new()),
    };

    let code = status.unwrap_or_else(|e| {
                         eprintln!("I/O error: {e}");
                         1
                     });
    std::process::exit(code);
}
