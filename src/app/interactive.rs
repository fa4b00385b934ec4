use crate::app::render::{render, render_options, render_ranges, OutputFormat};
use crate::core::directory::Directory;
use crate::domain::ports::RecordSource;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::validate_experience_range;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const HELP: &str = "\
Commands:
  search <text>        free-text search over name, city, degree and phone
  specialty [value]    filter by specialty (empty clears)
  city [value]         filter by city (empty clears)
  degree [value]       filter by degree (empty clears)
  experience <range>   filter by years of experience (see `ranges`)
  reset                clear search and all filters
  options              list available specialties, cities and degrees
  ranges               list experience ranges
  show                 print the current results
  help                 show this message
  quit                 leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Specialty(String),
    City(String),
    Degree(String),
    Experience(String),
    Reset,
    Options,
    Ranges,
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_start();
        let (keyword, raw_rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest),
            None => (line, ""),
        };
        // 搜尋字串原樣保留（含空白），其他參數去除前後空白
        let rest = raw_rest.trim();

        match keyword.to_lowercase().as_str() {
            "search" | "s" => Ok(Command::Search(raw_rest.to_string())),
            "specialty" => Ok(Command::Specialty(rest.to_string())),
            "city" => Ok(Command::City(rest.to_string())),
            "degree" => Ok(Command::Degree(rest.to_string())),
            "experience" | "exp" => {
                validate_experience_range("experience", rest)?;
                Ok(Command::Experience(rest.to_string()))
            }
            "reset" => Ok(Command::Reset),
            "options" => Ok(Command::Options),
            "ranges" => Ok(Command::Ranges),
            "show" | "" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(DirectoryError::ValidationError {
                message: format!("Unknown command '{}', type `help` for the list", other),
            }),
        }
    }
}

/// 逐行讀取指令，更新篩選狀態並輸出結果，直到 `quit` 或輸入結束
pub async fn run_interactive<S, R, W>(
    directory: &mut Directory<S>,
    reader: R,
    out: &mut W,
    format: OutputFormat,
) -> Result<()>
where
    S: RecordSource,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if let Some(message) = directory.error_message() {
        writeln!(out, "{}", message)?;
    }
    write!(out, "{}", render(format, &directory.refined())?)?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                tracing::debug!("Rejected input {:?}: {}", line, e);
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Search(term) => directory.state_mut().set_search_term(term),
            Command::Specialty(value) => directory.state_mut().set_specialty(value),
            Command::City(value) => directory.state_mut().set_city(value),
            Command::Degree(value) => directory.state_mut().set_degree(value),
            Command::Experience(label) => directory.state_mut().set_experience_range(label),
            Command::Reset => directory.reset(),
            Command::Options => {
                write!(out, "{}", render_options(directory.filter_options()))?;
                continue;
            }
            Command::Ranges => {
                write!(out, "{}", render_ranges())?;
                continue;
            }
            Command::Show => {}
            Command::Help => {
                write!(out, "{}", HELP)?;
                continue;
            }
            Command::Quit => break,
        }

        let refined = directory.refined();
        tracing::debug!("{} of {} advocates match", refined.len(), directory.records().len());
        write!(out, "{}", render(format, &refined)?)?;
    }

    out.flush()?;
    Ok(())
}
