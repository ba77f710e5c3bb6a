use std::{error, fs, io};
use std::io::BufRead;

/// Load a single polygon from a file of whitespace separated `x y` lines. Blank lines are skipped.
pub fn load_polygon(path: &str) -> Result<Vec<[f64; 2]>, Box<dyn error::Error>> {
    let mut output = Vec::new();
    let f = fs::File::open(path)?;
    for line in io::BufReader::new(f).lines() {
        let line = line?;
        let mut chunks = line.split_ascii_whitespace();
        if let Some(x) = chunks.next() {
            let x = x.parse::<f64>()?;
            let y = chunks.next().ok_or_else(|| Box::new(io::Error::new(io::ErrorKind::InvalidData, "Invalid input file")))?.parse::<f64>()?;
            output.push([x, y]);
        }
    }

    Ok(output)
}
