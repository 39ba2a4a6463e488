use std::io;
use std::io::Write;

pub fn input(prompt: &str) -> io::Result<String> {
    println!("{}", prompt);
    io::stdout().flush()?; // show the prompt before blocking on stdin

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
