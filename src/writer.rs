use std::io::{self, Stderr, Stdout, Write};

pub struct ConsoleWriter {
    pub out: Stdout,
    pub err: Stderr,
}

impl ConsoleWriter {
    pub fn new() -> Self {
        ConsoleWriter {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        ConsoleWriter::new()
    }
}

pub trait OutErr {
    fn write_err(&mut self, s: &str);
    fn write(&mut self, s: &str);
}

impl OutErr for ConsoleWriter {
    fn write_err(&mut self, s: &str) {
        match self.err.write_all(s.as_bytes()) {
            Ok(_) => (),
            Err(e) => eprintln!("{}", e),
        }
    }

    // flushed so watch output shows up line by line
    fn write(&mut self, s: &str) {
        let result = self
            .out
            .write_all(s.as_bytes())
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            eprintln!("{}", e);
        }
    }
}
