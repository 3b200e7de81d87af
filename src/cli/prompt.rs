use std::io::{self, BufRead, Write};

use crate::export::OutputFormat;
use crate::tuleap::{Project, Tracker};

/// Anything the user can pick from a numbered menu.
pub trait Labeled {
    fn label(&self) -> &str;
}

impl Labeled for Project {
    fn label(&self) -> &str {
        &self.label
    }
}

impl Labeled for Tracker {
    fn label(&self) -> &str {
        &self.label
    }
}

impl Labeled for OutputFormat {
    fn label(&self) -> &str {
        match self {
            OutputFormat::Csv => "CSV",
            OutputFormat::Json => "JSON",
            OutputFormat::Xlsx => "Excel",
        }
    }
}

/// Ask the user to pick one item from a numbered menu.
///
/// Empty list: a message and `None`; the caller treats that as a normal
/// early exit, not an error. A single item is selected without prompting.
/// Invalid input re-prompts locally and is never fatal.
pub fn select_item<'a, T: Labeled>(items: &'a [T], noun: &str) -> io::Result<Option<&'a T>> {
    let stdin = io::stdin();
    select_from(items, noun, &mut stdin.lock(), &mut io::stdout())
}

fn select_from<'a, T, R, W>(
    items: &'a [T],
    noun: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<&'a T>>
where
    T: Labeled,
    R: BufRead,
    W: Write,
{
    match items {
        [] => {
            writeln!(output, "No {noun} is available")?;
            Ok(None)
        }
        [only] => {
            writeln!(output, "The only available {noun} is '{}'", only.label())?;
            Ok(Some(only))
        }
        _ => {
            writeln!(output, "Available {noun}s:")?;
            for (i, item) in items.iter().enumerate() {
                writeln!(output, " - {} : {}", i + 1, item.label())?;
            }

            loop {
                write!(output, "Enter a number between 1 and {}: ", items.len())?;
                output.flush()?;

                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    // stdin closed underneath us; same outcome as an empty list
                    writeln!(output)?;
                    return Ok(None);
                }

                if let Ok(n) = line.trim().parse::<usize>() {
                    if (1..=items.len()).contains(&n) {
                        let selected = &items[n - 1];
                        writeln!(output, "You selected the {noun} '{}'", selected.label())?;
                        return Ok(Some(selected));
                    }
                }
                writeln!(output, "Invalid input")?;
            }
        }
    }
}

/// Free-text prompt for the output file name. Whatever extension the user
/// types is stripped; the chosen format supplies the real one.
pub fn prompt_filename(prompt: &str) -> io::Result<String> {
    let stdin = io::stdin();
    read_filename(prompt, &mut stdin.lock(), &mut io::stdout())
}

fn read_filename<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(filename_stem(line.trim()))
}

/// Everything before the first dot, falling back to "stats" for a blank
/// answer.
pub fn filename_stem(name: &str) -> String {
    let stem = name.split('.').next().unwrap_or_default();
    if stem.is_empty() {
        "stats".to_string()
    } else {
        stem.to_string()
    }
}
