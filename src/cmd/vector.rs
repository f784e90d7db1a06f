use anyhow::Result;
use clap::{arg, command, ArgMatches, Command};
use secrecy::ExposeSecret;

use super::{key_args, load_config, CommandType};
use crate::hotp::{format_code, trace};
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Vector.as_str())
        .about("Show each step of one HOTP computation")
        .args(key_args())
        .arg(
            arg!(--counter <COUNTER> "HOTP counter")
                .required(false)
                .default_value("0")
                .validator(|s| s.parse::<u64>()),
        )
}

pub fn run_vector<W>(vector_args: &ArgMatches, writer: &mut W) -> Result<()>
where
    W: OutErr,
{
    let secret = load_config(vector_args)?.secret()?;
    let counter = vector_args.value_of_t::<u64>("counter")?;
    let t = trace(secret.expose_secret(), counter)?;

    writer.write(&format!(
        "Counter: {}\n\
         Counter bytes (hex): {}\n\
         HMAC-SHA1 output (hex): {}\n\
         Offset: {}\n\
         Bytes at offset: {}\n\
         Binary (truncated): {}\n\
         Code: {}\n",
        counter,
        hex::encode(t.counter_bytes),
        hex::encode(&t.digest),
        t.offset,
        hex::encode(&t.digest[t.offset..t.offset + 4]),
        t.binary,
        format_code(t.code),
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::constants::*;
    use crate::tests::mocks::MockOtpWriter;
    use crate::tests::utils::get_cmd_args;

    #[test]
    fn traces_the_golden_vector() {
        let mut writer = MockOtpWriter::new();
        let arg_vec = vec!["-k", RFC_SECRET_BASE32];
        let vector_args = get_cmd_args(subcommand(), &arg_vec).unwrap();

        run_vector(&vector_args, &mut writer).unwrap();

        let expected = format!(
            "Counter: 0\n\
             Counter bytes (hex): 0000000000000000\n\
             HMAC-SHA1 output (hex): {}\n\
             Offset: {}\n\
             Bytes at offset: cc93cf18\n\
             Binary (truncated): {}\n\
             Code: {}\n",
            GOLDEN_DIGEST, GOLDEN_OFFSET, GOLDEN_BINARY, GOLDEN_CODE
        );
        assert_eq!(String::from_utf8(writer.out).unwrap(), expected);
        assert_eq!(writer.err, Vec::new());
    }

    #[test]
    fn traces_an_explicit_counter() {
        let mut writer = MockOtpWriter::new();
        let arg_vec = vec![
            "-k",
            "12345678901234567890",
            "--raw",
            "--counter",
            "1",
        ];
        let vector_args = get_cmd_args(subcommand(), &arg_vec).unwrap();

        run_vector(&vector_args, &mut writer).unwrap();

        let out = String::from_utf8(writer.out).unwrap();
        assert!(out.contains("Offset: 11\n"), "{}", out);
        assert!(out.ends_with("Code: 287082\n"), "{}", out);
    }

    #[test]
    fn does_not_print_the_secret() {
        let mut writer = MockOtpWriter::new();
        let arg_vec = vec!["-k", RFC_SECRET_BASE32];
        let vector_args = get_cmd_args(subcommand(), &arg_vec).unwrap();

        run_vector(&vector_args, &mut writer).unwrap();

        let out = String::from_utf8(writer.out).unwrap();
        assert!(!out.contains(&hex::encode(RFC_SECRET)));
        assert!(!out.contains(RFC_SECRET_BASE32));
    }
}
