//! Interactive driver for the binomial heap
//!
//! Reads whitespace-separated commands from stdin; every entry uses its key
//! as its value.
//!
//! | Command     | Effect                                             |
//! |-------------|----------------------------------------------------|
//! | `ins n`     | insert n                                           |
//! | `find n`    | print n if present, else `false`                   |
//! | `del n`     | delete n and print it, else `false`                |
//! | `dec k nk`  | lower key k to nk                                  |
//! | `min`       | print the minimum, else `false`                    |
//! | `emin`      | remove and print the minimum, else `false`         |
//! | `file path` | insert every integer in the file, echoing each one |
//! | `print`     | render the forest                                  |
//! | `reset`     | start over with an empty heap                      |

use anyhow::{Context, Result};
use binomial_forest::BinomialHeap;
use std::collections::VecDeque;
use std::fmt::Display;
use std::fs;
use std::io::{self, BufRead, Write};

type Key = i64;

/// Splits buffered input into whitespace-separated tokens across lines
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line).context("reading commands")? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }
}

struct Session<W> {
    heap: BinomialHeap<Key, Key>,
    out: W,
}

impl<W: Write> Session<W> {
    fn new(out: W) -> Self {
        Self {
            heap: BinomialHeap::new(),
            out,
        }
    }

    fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        let mut tokens = Tokens::new(input);
        while let Some(command) = tokens.next_token()? {
            self.execute(&command, &mut tokens)?;
        }
        self.out.flush().context("flushing output")
    }

    fn execute<R: BufRead>(&mut self, command: &str, tokens: &mut Tokens<R>) -> Result<()> {
        match command {
            "ins" => {
                if let Some(key) = self.argument(tokens)? {
                    self.heap.insert(key, key);
                }
            }
            "find" => {
                if let Some(key) = self.argument(tokens)? {
                    let found = self.heap.find(&key).copied();
                    self.report(found)?;
                }
            }
            "del" => {
                if let Some(key) = self.argument(tokens)? {
                    let removed = self.heap.delete(&key);
                    self.report(removed)?;
                }
            }
            "dec" => {
                let Some(key) = self.argument(tokens)? else {
                    return Ok(());
                };
                let Some(new_key) = self.argument(tokens)? else {
                    return Ok(());
                };
                if let Err(err) = self.heap.decrease_key(&key, new_key) {
                    eprintln!("dec {} {}: {}", key, new_key, err);
                }
            }
            "min" => {
                let min = self.heap.min().copied();
                self.report(min)?;
            }
            "emin" => {
                let min = self.heap.extract_min();
                self.report(min)?;
            }
            "file" => {
                if let Some(path) = tokens.next_token()? {
                    self.load(&path)?;
                }
            }
            "print" => writeln!(self.out, "{}", self.heap)?,
            "reset" => self.heap = BinomialHeap::new(),
            _ => writeln!(self.out, "Invalid command")?,
        }
        Ok(())
    }

    /// Reads one integer argument; a malformed token is reported and skipped
    fn argument<R: BufRead>(&mut self, tokens: &mut Tokens<R>) -> Result<Option<Key>> {
        let Some(token) = tokens.next_token()? else {
            return Ok(None);
        };
        match token.parse() {
            Ok(key) => Ok(Some(key)),
            Err(_) => {
                writeln!(self.out, "Invalid argument {}", token)?;
                Ok(None)
            }
        }
    }

    fn report<T: Display>(&mut self, result: Option<T>) -> Result<()> {
        match result {
            Some(value) => writeln!(self.out, "{}", value)?,
            None => writeln!(self.out, "false")?,
        }
        Ok(())
    }

    fn load(&mut self, path: &str) -> Result<()> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                writeln!(self.out, "{}: {}", path, err)?;
                return Ok(());
            }
        };
        for token in contents.split_whitespace() {
            match token.parse::<Key>() {
                Ok(key) => {
                    self.heap.insert(key, key);
                    writeln!(self.out, "{}", key)?;
                }
                Err(_) => writeln!(self.out, "Invalid argument {}", token)?,
            }
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdout.lock()).run(stdin.lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(script: &str) -> String {
        let mut out = Vec::new();
        Session::new(&mut out).run(script.as_bytes()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_insert_and_extract() {
        let out = transcript("ins 1 ins 2 ins 3 ins 4 ins 5\nmin emin min\n");
        assert_eq!(out, "1\n1\n2\n");
    }

    #[test]
    fn test_decrease_then_find() {
        let out = transcript("ins 10\nins 20\ndec 20 5\nmin\nfind 20\nfind 5\n");
        // the entry keeps its value: key 5 now carries 20
        assert_eq!(out, "20\nfalse\n20\n");
    }

    #[test]
    fn test_missing_entries_print_false() {
        let out = transcript("min\nemin\ndel 3\nfind 3\n");
        assert_eq!(out, "false\nfalse\nfalse\nfalse\n");
    }

    #[test]
    fn test_arguments_may_span_lines() {
        let out = transcript("ins\n42\nfind\n42\n");
        assert_eq!(out, "42\n");
    }

    #[test]
    fn test_invalid_input() {
        let out = transcript("bogus\nins x\n");
        assert_eq!(out, "Invalid command\nInvalid argument x\n");
    }

    #[test]
    fn test_reset_and_print() {
        let out = transcript("ins 2 ins 1 reset print ins 3 print\n");
        assert_eq!(out, "head\nhead\n└──3:3\n");
    }

    #[test]
    fn test_file_loads_integers() {
        let path = std::env::temp_dir().join(format!("bheap-load-{}.txt", std::process::id()));
        fs::write(&path, "4 2\n9\n").unwrap();

        let out = transcript(&format!("file {}\nmin\n", path.display()));
        fs::remove_file(&path).unwrap();
        assert_eq!(out, "4\n2\n9\n2\n");
    }
}
