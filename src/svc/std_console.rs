use std::io::{BufRead, Write};

use crate::hal::console::Console;

pub struct StdConsole;

impl Console for StdConsole {
    fn write(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
            log::warn!("Cannot write to stdout: {e}");
        }
    }

    fn read_line(&self) -> anyhow::Result<String> {
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(strip_line_terminator(&line).to_owned())
    }
}

fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
