//! Interactive shell over a `SegDeque<i32>`.
//!
//! ```text
//! segdeque-shell [SEGMENT_CAPACITY]
//! ```
//!
//! Reads one command per line from stdin. Type `help` for the command list.

use segdeque::{Config, Error, SegDeque};
use std::io::{self, BufRead, Write};
use std::process;

const HELP: &str = "
Available commands:
  help                    - Show this help menu
  deque <values...>       - Create new deque with given values
  append <value>          - Add value to the end
  prepend <value>         - Add value to the beginning
  pop_back                - Remove last element
  pop_front               - Remove first element
  get <index>             - Get element at index
  set <index> <value>     - Set element at index to value
  print                   - Print current deque
  size                    - Show deque size
  empty                   - Check if deque is empty
  clear                   - Clear the deque
  map <operation>         - Apply operation to all elements (double, square, abs)
  filter <condition>      - Filter elements (even, odd, positive, negative)
  reduce <operation>      - Reduce deque to single value (sum, product, max, min)
  iterate                 - Show elements using a cursor
  segments                - Show segment information
  exit                    - Exit the program
";

struct Shell {
    config: Config,
    deque: SegDeque<i32>,
}

impl Shell {
    fn new(config: Config) -> Self {
        Shell {
            config,
            deque: SegDeque::with_config(config),
        }
    }

    /// Runs one input line. Returns `false` once the shell should stop.
    fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (command, args) = match tokens.split_first() {
            Some((command, args)) => (*command, args),
            None => return Ok(true),
        };
        match command {
            "help" => write!(out, "{}", HELP)?,
            "exit" => {
                writeln!(out, "Goodbye!")?;
                return Ok(false);
            }
            "deque" => self.create(args, out)?,
            "append" => match args {
                [value] => match value.parse::<i32>() {
                    Ok(value) => {
                        self.deque.push_back(value);
                        writeln!(out, "Appended {}", value)?;
                    }
                    Err(_) => writeln!(out, "Invalid number: {}", value)?,
                },
                _ => writeln!(out, "Usage: append <value>")?,
            },
            "prepend" => match args {
                [value] => match value.parse::<i32>() {
                    Ok(value) => {
                        self.deque.push_front(value);
                        writeln!(out, "Prepended {}", value)?;
                    }
                    Err(_) => writeln!(out, "Invalid number: {}", value)?,
                },
                _ => writeln!(out, "Usage: prepend <value>")?,
            },
            "pop_back" => match self.deque.pop_back() {
                Ok(value) => writeln!(out, "Popped back element {}", value)?,
                Err(Error::Underflow) => writeln!(out, "Deque is empty")?,
                Err(e) => writeln!(out, "Error: {}", e)?,
            },
            "pop_front" => match self.deque.pop_front() {
                Ok(value) => writeln!(out, "Popped front element {}", value)?,
                Err(Error::Underflow) => writeln!(out, "Deque is empty")?,
                Err(e) => writeln!(out, "Error: {}", e)?,
            },
            "get" => match args {
                [index] => match index.parse::<usize>() {
                    Ok(index) => match self.deque.get(index) {
                        Ok(value) => writeln!(out, "Element at index {}: {}", index, value)?,
                        Err(e) => writeln!(out, "Error: {}", e)?,
                    },
                    Err(_) => writeln!(out, "Invalid index: {}", index)?,
                },
                _ => writeln!(out, "Usage: get <index>")?,
            },
            "set" => match args {
                [index, value] => match (index.parse::<usize>(), value.parse::<i32>()) {
                    (Ok(index), Ok(value)) => match self.deque.get_mut(index) {
                        Ok(slot) => {
                            *slot = value;
                            writeln!(out, "Set element at index {} to {}", index, value)?;
                        }
                        Err(e) => writeln!(out, "Error: {}", e)?,
                    },
                    _ => writeln!(out, "Invalid parameters")?,
                },
                _ => writeln!(out, "Usage: set <index> <value>")?,
            },
            "print" => self.print(out)?,
            "size" => writeln!(out, "Size: {}", self.deque.len())?,
            "empty" => writeln!(out, "Empty: {}", self.deque.is_empty())?,
            "clear" => {
                self.deque.clear();
                writeln!(out, "Deque cleared")?;
            }
            "map" => self.map(args, out)?,
            "filter" => self.filter(args, out)?,
            "reduce" => self.reduce(args, out)?,
            "iterate" => self.iterate(out)?,
            "segments" => self.segments(out)?,
            _ => writeln!(
                out,
                "Unknown command: {}. Type 'help' for available commands.",
                command
            )?,
        }
        Ok(true)
    }

    fn create<W: Write>(&mut self, args: &[&str], out: &mut W) -> io::Result<()> {
        let mut deque = SegDeque::with_config(self.config);
        for arg in args {
            match arg.parse::<i32>() {
                Ok(value) => deque.push_back(value),
                Err(_) => return writeln!(out, "Invalid number: {}", arg),
            }
        }
        self.deque = deque;
        writeln!(out, "Created deque with {} elements", self.deque.len())?;
        self.print(out)
    }

    fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.deque.is_empty() {
            return writeln!(out, "Deque is empty");
        }
        let items: Vec<String> = self.deque.iter().map(i32::to_string).collect();
        writeln!(out, "Deque: [{}]", items.join(", "))
    }

    fn map<W: Write>(&mut self, args: &[&str], out: &mut W) -> io::Result<()> {
        let (mapped, name) = match args {
            ["double"] => (self.deque.map(|x| x.wrapping_mul(2)), "double"),
            ["square"] => (self.deque.map(|x| x.wrapping_mul(*x)), "square"),
            ["abs"] => (self.deque.map(|x| x.wrapping_abs()), "absolute value"),
            [_] => {
                return writeln!(out, "Unknown operation. Available: double, square, abs");
            }
            _ => return writeln!(out, "Usage: map <operation> (double, square, abs)"),
        };
        self.deque = mapped;
        writeln!(out, "Applied {} operation", name)
    }

    fn filter<W: Write>(&mut self, args: &[&str], out: &mut W) -> io::Result<()> {
        let (filtered, name) = match args {
            ["even"] => (self.deque.filter(|x| x % 2 == 0), "even"),
            ["odd"] => (self.deque.filter(|x| x % 2 != 0), "odd"),
            ["positive"] => (self.deque.filter(|x| *x > 0), "positive"),
            ["negative"] => (self.deque.filter(|x| *x < 0), "negative"),
            [_] => {
                return writeln!(
                    out,
                    "Unknown condition. Available: even, odd, positive, negative"
                );
            }
            _ => {
                return writeln!(
                    out,
                    "Usage: filter <condition> (even, odd, positive, negative)"
                )
            }
        };
        self.deque = filtered;
        writeln!(out, "Filtered {} numbers", name)
    }

    fn reduce<W: Write>(&self, args: &[&str], out: &mut W) -> io::Result<()> {
        let op = match args {
            [op] => *op,
            _ => return writeln!(out, "Usage: reduce <operation> (sum, product, max, min)"),
        };
        let first = match self.deque.front() {
            Some(first) => *first,
            None => return writeln!(out, "Cannot reduce empty deque"),
        };
        match op {
            "sum" => writeln!(
                out,
                "Sum: {}",
                self.deque.reduce(0, |acc: i32, x| acc.wrapping_add(*x))
            ),
            "product" => writeln!(
                out,
                "Product: {}",
                self.deque.reduce(1, |acc: i32, x| acc.wrapping_mul(*x))
            ),
            "max" => writeln!(out, "Max: {}", self.deque.reduce(first, |acc, &x| acc.max(x))),
            "min" => writeln!(out, "Min: {}", self.deque.reduce(first, |acc, &x| acc.min(x))),
            _ => writeln!(out, "Unknown operation. Available: sum, product, max, min"),
        }
    }

    fn iterate<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.deque.is_empty() {
            return writeln!(out, "Deque is empty");
        }
        write!(out, "Iterating through deque: ")?;
        let mut cursor = self.deque.cursor();
        let mut first = true;
        while cursor.advance() {
            if let Ok(value) = cursor.get() {
                if !first {
                    write!(out, ", ")?;
                }
                write!(out, "{}", value)?;
                first = false;
            }
        }
        writeln!(out)
    }

    fn segments<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Segment count: {}", self.deque.segment_count())?;
        for (i, segment) in self.deque.segments().enumerate() {
            writeln!(
                out,
                "Segment {}: front_offset={}, back_size={}, effective_size={}",
                i,
                segment.front_offset(),
                segment.back_size(),
                segment.len()
            )?;
        }
        Ok(())
    }
}

fn parse_config() -> Config {
    let arg = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => return Config::default(),
    };
    let parsed = arg
        .parse::<usize>()
        .map_err(|e| e.to_string())
        .and_then(|n| Config::new(n).map_err(|e| e.to_string()));
    match parsed {
        Ok(config) => config,
        Err(e) => {
            eprintln!("segdeque-shell: bad segment capacity {:?}: {}", arg, e);
            eprintln!("usage: segdeque-shell [SEGMENT_CAPACITY]");
            process::exit(2);
        }
    }
}

fn run() -> io::Result<()> {
    let mut shell = Shell::new(parse_config());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "SegDeque Interactive Menu")?;
    write!(out, "{}", HELP)?;
    writeln!(out)?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(out, "deque> ")?;
        out.flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if !shell.execute(&line, &mut out)? {
            break;
        }
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("segdeque-shell: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_lines(shell: &mut Shell, lines: &[&str]) -> String {
        let mut out = Vec::new();
        for line in lines {
            shell.execute(line, &mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn build_and_print() {
        let mut shell = Shell::new(Config::new(2).unwrap());
        let out = run_lines(&mut shell, &["deque 1 2 3", "prepend 0", "append 4", "print"]);
        assert!(out.contains("Created deque with 3 elements"));
        assert!(out.ends_with("Deque: [0, 1, 2, 3, 4]\n"));
    }

    #[test]
    fn bad_input_keeps_state() {
        let mut shell = Shell::new(Config::default());
        let out = run_lines(
            &mut shell,
            &["deque 1 2", "deque 3 x", "append y", "get 9", "set 0", "bogus"],
        );
        assert!(out.contains("Invalid number: x"));
        assert!(out.contains("Invalid number: y"));
        assert!(out.contains("Error: index out of range: index is 9, len is 2"));
        assert!(out.contains("Usage: set <index> <value>"));
        assert!(out.contains("Unknown command: bogus."));
        assert_eq!(shell.deque, vec![1, 2]);
    }

    #[test]
    fn pops_on_empty() {
        let mut shell = Shell::new(Config::default());
        let out = run_lines(&mut shell, &["pop_back", "pop_front", "reduce sum"]);
        assert_eq!(
            out,
            "Deque is empty\nDeque is empty\nCannot reduce empty deque\n"
        );
    }

    #[test]
    fn transforms() {
        let mut shell = Shell::new(Config::new(3).unwrap());
        run_lines(&mut shell, &["deque -3 -2 -1 0 1 2 3", "map abs", "filter positive"]);
        assert_eq!(shell.deque, vec![3, 2, 1, 1, 2, 3]);
        assert_eq!(shell.deque.segment_capacity(), 3);

        let out = run_lines(
            &mut shell,
            &["reduce sum", "reduce product", "reduce max", "reduce min"],
        );
        assert_eq!(out, "Sum: 12\nProduct: 36\nMax: 3\nMin: 1\n");

        run_lines(&mut shell, &["map square", "filter even", "set 0 7"]);
        assert_eq!(shell.deque, vec![7, 4]);
    }

    #[test]
    fn segments_and_iterate() {
        let mut shell = Shell::new(Config::new(2).unwrap());
        let out = run_lines(&mut shell, &["append 1", "append 2", "append 3", "prepend 0"]);
        assert!(out.ends_with("Prepended 0\n"));

        let out = run_lines(&mut shell, &["segments", "iterate"]);
        assert_eq!(
            out,
            "Segment count: 3\n\
             Segment 0: front_offset=1, back_size=2, effective_size=1\n\
             Segment 1: front_offset=0, back_size=2, effective_size=2\n\
             Segment 2: front_offset=0, back_size=1, effective_size=1\n\
             Iterating through deque: 0, 1, 2, 3\n"
        );
    }

    #[test]
    fn clear_keeps_capacity_and_exit_stops() {
        let mut shell = Shell::new(Config::new(4).unwrap());
        run_lines(&mut shell, &["deque 1 2 3 4 5", "clear"]);
        assert!(shell.deque.is_empty());
        assert_eq!(shell.deque.segment_count(), 1);
        assert_eq!(shell.deque.segment_capacity(), 4);

        let mut out = Vec::new();
        assert!(!shell.execute("exit", &mut out).unwrap());
        assert!(shell.execute("   ", &mut out).unwrap());
        assert!(shell.execute("size", &mut out).unwrap());
    }
}
