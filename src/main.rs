#[macro_use]
extern crate log;

use clap::command;
use std::process;

use otp_token::cmd::{code, vector, watch, CommandType};
use otp_token::writer::{ConsoleWriter, OutErr};

fn main() {
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn").and_then(|logger| logger.start());

    let matches = command!()
        .about("Time-stepped one-time codes from a shared secret")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommands(vec![
            code::subcommand(),
            watch::subcommand(),
            vector::subcommand(),
        ])
        .get_matches();

    let mut writer = ConsoleWriter::new();

    let result = match matches.subcommand() {
        Some((name, args)) => {
            debug!("running {}", name);
            match name {
                n if n == CommandType::Code.as_str() => code::run_code(args, &mut writer),
                n if n == CommandType::Watch.as_str() => watch::run_watch(args, &mut writer),
                n if n == CommandType::Vector.as_str() => vector::run_vector(args, &mut writer),
                _ => Ok(()),
            }
        }
        None => Ok(()),
    };

    if let Err(err) = result {
        writer.write_err(&format!("{:#}\n", err));
        process::exit(1);
    }
}
