use rill::Driver;
use rill_report::ConsoleReporter;
use std::env;
use std::io::{self, Write};
use std::process;

fn main() {
    env_logger::init();

    let reporter = ConsoleReporter;
    let mut driver = Driver::new(&reporter);

    if let Some(path) = env::args().nth(1) {
        if !driver.run_file(&path) {
            process::exit(1);
        }
        return;
    }

    repl(&mut driver);
}

fn repl(driver: &mut Driver) {
    let mut stdout = io::stdout();
    let stdin = io::stdin();
    loop {
        print!("> ");
        if stdout.flush().is_err() {
            return;
        }

        let mut input = String::new();
        match stdin.read_line(&mut input) {
            // End of input.
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }

        driver.run(&input);
    }
}
