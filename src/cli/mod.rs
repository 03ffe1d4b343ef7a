use anyhow::Result;

mod args;
pub mod commands;
mod exit_status;
mod json_output;
pub mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let output = args.output_options();

    let result = run::run(&args)?;
    report::print(&result, output);

    Ok(result.exit_status())
}
