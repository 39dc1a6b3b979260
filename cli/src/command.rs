use anyhow::{bail, Context};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(usize),
    Step,
    Set { row: usize, col: usize },
    Toggle { row: usize, col: usize },
    Paint { pattern: String, row: isize, col: isize },
    Erase { pattern: String, row: isize, col: isize },
    Clear,
    Random,
    Patterns,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Changes the board, so the shell prints it afterwards.
    pub fn mutates(&self) -> bool {
        !matches!(self, Command::Patterns | Command::Show | Command::Help | Command::Quit)
    }
}

pub const HELP: &str = "\
commands:
  run N              advance N generations, printing each (stops early on a halt)
  step               advance one generation
  set R C            make the cell at row R, column C alive
  toggle R C         flip the cell at row R, column C
  paint NAME R C     stamp a pattern with its top-left corner at R C
  erase NAME R C     erase a pattern's cells at R C
  clear              kill every cell and reset the iteration count
  random             randomize every cell
  patterns           list available patterns
  show               print the board
  help               print this message
  quit               leave";

pub fn parse(line: &str) -> anyhow::Result<Command> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        bail!("empty command");
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "run" | "1" => Command::Run(number(words.next(), "iteration count")?),
        "step" | "s" => Command::Step,
        "set" | "2" => Command::Set {
            row: number(words.next(), "row")?,
            col: number(words.next(), "column")?,
        },
        "toggle" | "t" => Command::Toggle {
            row: number(words.next(), "row")?,
            col: number(words.next(), "column")?,
        },
        "paint" | "p" => Command::Paint {
            pattern: word(words.next(), "pattern name")?,
            row: number(words.next(), "row")?,
            col: number(words.next(), "column")?,
        },
        "erase" | "e" => Command::Erase {
            pattern: word(words.next(), "pattern name")?,
            row: number(words.next(), "row")?,
            col: number(words.next(), "column")?,
        },
        "clear" | "c" => Command::Clear,
        "random" | "r" => Command::Random,
        "patterns" | "ls" => Command::Patterns,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => bail!("unknown command `{other}`, try `help`"),
    };

    if let Some(extra) = words.next() {
        bail!("unexpected argument `{extra}`");
    }
    Ok(command)
}

fn word(token: Option<&str>, what: &str) -> anyhow::Result<String> {
    token
        .map(str::to_string)
        .with_context(|| format!("missing {what}"))
}

fn number<T>(token: Option<&str>, what: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let token = token.with_context(|| format!("missing {what}"))?;
    token
        .parse()
        .with_context(|| format!("invalid {what} `{token}`"))
}
