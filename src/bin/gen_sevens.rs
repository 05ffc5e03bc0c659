// Writes a string of sevens of each length read from stdin.
use anyhow::Result;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    let mut stdout = io::stdout();

    for line in io::stdin().lock().lines() {
        let Ok(len) = line?.trim().parse::<usize>() else {
            continue;
        };
        writeln!(stdout, "{}", "7".repeat(len))?;
        stdout.flush()?;
    }
    Ok(())
}
