// Writes a uniformly random digit string of each length read from stdin.
use anyhow::Result;
use rand::distributions::Uniform;
use rand::Rng;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    let digits = Uniform::new_inclusive(b'0', b'9');
    let mut rng = rand::thread_rng();
    let mut stdout = io::stdout();

    for line in io::stdin().lock().lines() {
        let Ok(len) = line?.trim().parse::<usize>() else {
            continue;
        };
        let mut number: Vec<u8> = (&mut rng).sample_iter(digits).take(len).collect();
        number.push(b'\n');
        stdout.write_all(&number)?;
        stdout.flush()?;
    }
    Ok(())
}
