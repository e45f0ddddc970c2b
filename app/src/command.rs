//! Line commands of the terminal front-end.

/// What one line of input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Type the text into the title field and submit the form.
    Add(String),
    Refresh,
    Quit,
}

impl Command {
    /// `:q` quits, `:r` refreshes, anything else is a title, taken verbatim
    /// (an empty line submits an empty title).
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        match line {
            ":q" => Command::Quit,
            ":r" => Command::Refresh,
            title => Command::Add(title.to_string()),
        }
    }
}
