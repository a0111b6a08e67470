use cas_symbolic::{add, constant, variable, Expr, Knowns};
use cas_error::Error;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::process::ExitCode;

/// Initializes the terminal logger, reading the level from the `CAS_LOG` environment variable.
fn init_logger() {
    let level = std::env::var("CAS_LOG")
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn);

    // a logger can only fail to initialize if one is already set
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}

/// `x*x + 5x + 6`
fn quadratic() -> Result<Expr, Error> {
    add(vec![
        variable("x") * variable("x"),
        constant(5.0) * variable("x"),
        constant(6.0),
    ])
}

fn run(expr: &Expr) -> Result<(), Error> {
    let deriv = expr.derivative("x");
    println!("f(x)   = {expr}");
    println!("f'(x)  = {deriv}");

    let simplified = deriv.simplify(&Knowns::new())?;
    println!("       = {simplified}");

    let at = Knowns::new().with("x", 2.0);
    println!("f'(2)  = {}", deriv.simplify(&at)?);
    info!("evaluated {} at x = 2", simplified);
    Ok(())
}

fn main() -> ExitCode {
    init_logger();

    let expr = match quadratic() {
        Ok(expr) => expr,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        },
    };

    match run(&expr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.report_to_stderr("expr", &expr.to_string()).is_err() {
                eprintln!("error: {err}");
            }
            ExitCode::FAILURE
        },
    }
}
