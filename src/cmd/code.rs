use anyhow::Result;
use clap::{arg, command, ArgMatches, Command};

use super::{build_totp, key_args, source_args, CommandType};
use crate::time_source::TimeSource;
use crate::totp::Totp;
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Code.as_str())
        .about("Print the current one-time code")
        .args(key_args())
        .args(source_args())
        .arg(arg!(-v --verbose "Also print the counter and the seconds left in the window"))
}

pub fn run_code<W>(code_args: &ArgMatches, writer: &mut W) -> Result<()>
where
    W: OutErr,
{
    let totp = build_totp(code_args)?;
    print_code(&totp, code_args.is_present("verbose"), writer)
}

pub fn print_code<S, W>(totp: &Totp<S>, verbose: bool, writer: &mut W) -> Result<()>
where
    S: TimeSource,
    W: OutErr,
{
    let token = totp.generate()?;

    if verbose {
        writer.write(&format!(
            "{} (counter {}, {}s left)\n",
            token, token.counter, token.remaining
        ));
    } else {
        writer.write(&format!("{}\n", token));
    }
    Ok(())
}
