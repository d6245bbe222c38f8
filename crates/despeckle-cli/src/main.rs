use std::process::exit;

use log::error;

mod cmd_args;
mod options;

fn main() {
    let cmd = cmd_args::create_cmd_args();
    let matches = cmd.get_matches();

    options::setup_logger(&matches);

    let run = match options::parse_options(&matches) {
        Ok(run) => run,
        Err(e) => {
            error!("Invalid options: {}", e);
            exit(1);
        }
    };

    if let Err(e) = run.execute() {
        error!("Could not process {}: {}", run.input.display(), e);
        exit(1);
    }
}
