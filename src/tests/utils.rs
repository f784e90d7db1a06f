use clap::{ArgMatches, Command};

/// Parses `args` as if they followed `otp-token <subcommand>` on the command line.
pub fn get_cmd_args(subcommand: Command, args: &[&str]) -> Result<ArgMatches, clap::Error> {
    let name = subcommand.get_name().to_string();
    let mut argv = vec!["otp-token", name.as_str()];
    argv.extend_from_slice(args);

    let matches = Command::new("otp-token")
        .subcommand(subcommand)
        .try_get_matches_from(argv)?;

    Ok(matches
        .subcommand_matches(&name)
        .cloned()
        .unwrap_or_else(|| panic!("Expected {} subcommand", name)))
}
