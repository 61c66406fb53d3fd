//! Interactive browsing over stdin.

use std::cell::RefCell;
use std::io;
use std::io::BufRead;
use std::io::Write;
use std::rc::Rc;
use std::str::FromStr;

use log::debug;
use quayside_lib::model::Identifiable;
use quayside_lib::model::Record;
use quayside_lib::table::DataTable;
use quayside_lib::table::DataTableBuilder;
use quayside_lib::table::TableEvent;
use quayside_lib::table::TextRenderer;
use thiserror::Error;

use crate::args::BrowseArgs;
use crate::config::CliConfig;
use crate::error::CliError;

const PROMPT: &str = "> ";

const HELP: &str = "\
Commands:
  /TEXT          search for TEXT (a lone / clears the search)
  sort KEY       sort by column KEY, again to reverse
  n, p           next / previous page
  first, last    first / last page
  page N         go to page N
  size N         show N rows per page
  open ID        open the row with id ID
  act ID ACTION  run ACTION on the row with id ID
  help           show this help
  q              quit";

/// A parsed browse command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Sort(String),
    Next,
    Previous,
    First,
    Last,
    Page(usize),
    Size(usize),
    Open(String),
    Act { id: String, action: String },
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', type help for a list")]
    Unknown(String),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if let Some(query) = line.strip_prefix('/') {
            return Ok(Command::Search(query.to_string()));
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let argument = |command: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument(command))
            } else {
                Ok(rest.to_string())
            }
        };
        let number = |command: &'static str| -> Result<usize, CommandError> {
            let text = argument(command)?;
            text.parse::<usize>()
                .map_err(|_| CommandError::InvalidNumber(text))
        };

        match name {
            "sort" => Ok(Command::Sort(argument("sort")?)),
            "n" | "next" => Ok(Command::Next),
            "p" | "prev" => Ok(Command::Previous),
            "first" => Ok(Command::First),
            "last" => Ok(Command::Last),
            "page" => Ok(Command::Page(number("page")?)),
            "size" => Ok(Command::Size(number("size")?)),
            "open" => Ok(Command::Open(argument("open")?)),
            "act" => {
                let rest = argument("act")?;
                match rest.split_once(char::is_whitespace) {
                    Some((id, action)) => Ok(Command::Act {
                        id: id.to_string(),
                        action: action.trim().to_string(),
                    }),
                    None => Err(CommandError::MissingArgument("act")),
                }
            }
            "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// An interactive session over one record file.
pub struct Session {
    records: Vec<Record>,
    table: DataTable<Record>,
    renderer: TextRenderer,
    notices: Rc<RefCell<Vec<String>>>,
}

impl Session {
    /// Loads the records and columns named by `args`.
    pub fn open(args: &BrowseArgs, config: &CliConfig) -> Result<Self, CliError> {
        let records = crate::load_records(&args.table.records)?;
        let builder = crate::table_builder(&records, &args.table, config)?;
        Self::new(records, builder, TextRenderer::new(config.max_cell_width))
    }

    /// Builds a session, wiring row clicks and actions to notices.
    pub fn new(
        records: Vec<Record>,
        builder: DataTableBuilder<Record>,
        renderer: TextRenderer,
    ) -> Result<Self, CliError> {
        let notices = Rc::new(RefCell::new(Vec::new()));
        let clicks = Rc::clone(&notices);
        let actions = Rc::clone(&notices);

        let table = builder
            .on_row_click(move |row: &Record| {
                clicks.borrow_mut().push(format!("Opened {}", row.id()));
            })
            .on_action(move |row: &Record, action: &str| {
                actions
                    .borrow_mut()
                    .push(format!("Ran '{}' on {}", action, row.id()));
            })
            .build()?;

        Ok(Self {
            records,
            table,
            renderer,
            notices,
        })
    }

    /// Renders the current view.
    pub fn render(&mut self) -> String {
        let view = self.table.view(&self.records);
        self.renderer.render(&view)
    }

    /// Applies one command and returns the text to print, or `None` to quit.
    pub fn apply(&mut self, command: Command) -> Option<String> {
        let event = match command {
            Command::Quit => return None,
            Command::Help => return Some(HELP.to_string()),
            Command::Search(query) => TableEvent::QueryChanged(query),
            Command::Sort(key) => TableEvent::HeaderClicked(key),
            Command::Next => TableEvent::NextPage,
            Command::Previous => TableEvent::PreviousPage,
            Command::First => TableEvent::FirstPage,
            Command::Last => TableEvent::LastPage,
            Command::Page(page) => TableEvent::GoToPage(page),
            Command::Size(size) => TableEvent::PageSizeChanged(size),
            Command::Open(id) => return Some(self.notify(id, None)),
            Command::Act { id, action } => return Some(self.notify(id, Some(action))),
        };

        let view = self.table.dispatch(event, &self.records);
        Some(self.renderer.render(&view))
    }

    fn notify(&mut self, id: String, action: Option<String>) -> String {
        let event = match action {
            Some(action) => TableEvent::action(&id, action),
            None => TableEvent::row(&id),
        };
        self.table.dispatch(event, &self.records);

        let notices: Vec<String> = self.notices.borrow_mut().drain(..).collect();
        if notices.is_empty() {
            format!("No row with id {} on this page", id)
        } else {
            notices.join("\n")
        }
    }

    /// Runs the read-eval-print loop until `q` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        writeln!(output, "{}", self.render())?;
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                write!(output, "{}", PROMPT)?;
                output.flush()?;
                continue;
            }

            debug!("browse command: {}", line);
            match line.parse::<Command>() {
                Ok(command) => match self.apply(command) {
                    Some(text) => writeln!(output, "{}", text)?,
                    None => break,
                },
                Err(e) => writeln!(output, "error: {}", e)?,
            }
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quayside_lib::table::Column;
    use quayside_lib::table::TableConfig;

    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("/mscu".parse(), Ok(Command::Search("mscu".to_string())));
        assert_eq!("/".parse(), Ok(Command::Search(String::new())));
        assert_eq!("sort containerNo".parse(), Ok(Command::Sort("containerNo".to_string())));
        assert_eq!(" n ".parse(), Ok(Command::Next));
        assert_eq!("page 3".parse(), Ok(Command::Page(3)));
        assert_eq!(
            "act c-1 release hold".parse(),
            Ok(Command::Act {
                id: "c-1".to_string(),
                action: "release hold".to_string()
            })
        );
        assert_eq!("q".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "page".parse::<Command>(),
            Err(CommandError::MissingArgument("page"))
        );
        assert_eq!(
            "size ten".parse::<Command>(),
            Err(CommandError::InvalidNumber("ten".to_string()))
        );
        assert_eq!(
            "act c-1".parse::<Command>(),
            Err(CommandError::MissingArgument("act"))
        );
        assert_eq!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }

    fn session() -> Session {
        let records = (1..=7)
            .map(|i| Record::new(format!("c-{}", i)).set("bay", format!("B{}", i)))
            .collect();
        let builder = DataTable::builder()
            .column(Column::new("bay", "Bay").sortable())
            .config(TableConfig::default().page_size(3));
        Session::new(records, builder, TextRenderer::default()).unwrap()
    }

    #[test]
    fn test_open_and_act_notices() {
        let mut session = session();
        assert_eq!(
            session.apply(Command::Open("c-2".to_string())).unwrap(),
            "Opened c-2"
        );
        assert_eq!(
            session
                .apply(Command::Act {
                    id: "c-1".to_string(),
                    action: "hold".to_string()
                })
                .unwrap(),
            "Ran 'hold' on c-1"
        );
        // c-7 is on page 3
        assert_eq!(
            session.apply(Command::Open("c-7".to_string())).unwrap(),
            "No row with id c-7 on this page"
        );
    }

    #[test]
    fn test_run_loop() {
        let mut session = session();
        let input = b"last\nbogus\nq\nn\n";
        let mut output = Vec::new();
        session.run(&input[..], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Page 1 of 3"));
        assert!(text.contains("Showing 7 to 7 of 7 entries · Page 3 of 3"));
        assert!(text.contains("error: unknown command 'bogus'"));
        // input after q is not processed
        assert_eq!(text.matches("Page 3 of 3").count(), 1);
    }
}
