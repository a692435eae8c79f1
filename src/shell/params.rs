use super::errors::ShellError;

/// Display switch addressed by a setter command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Glosses,
    FileInfo,
    ByteOffset,
    SenseFlag,
}

impl Toggle {
    fn name(self) -> &'static str {
        match self {
            Toggle::Glosses => "glosses",
            Toggle::FileInfo => "fileinfo",
            Toggle::ByteOffset => "byteoffset",
            Toggle::SenseFlag => "senseflag",
        }
    }
}

/// Arguments shared by `search` and `searchtree`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchArgs {
    pub word: String,
    pub pos: i64,
    pub search: i64,
    pub sense: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FindValidSearches { word: String, pos: i64 },
    Bit { n: i64 },
    Search(SearchArgs),
    SearchTree(SearchArgs),
    SetToggle { toggle: Toggle, on: bool },
    ContextualHelp { pos: i64, search: i64 },
    ReopenDb,
    AbortSearch,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::FindValidSearches { .. } => "findvalidsearches",
            Command::Bit { .. } => "bit",
            Command::Search(_) => "search",
            Command::SearchTree(_) => "searchtree",
            Command::SetToggle { toggle, .. } => toggle.name(),
            Command::ContextualHelp { .. } => "contextualhelp",
            Command::ReopenDb => "reopendb",
            Command::AbortSearch => "abortsearch",
        }
    }

    /// Parse a tokenized command line (`argv[0]` is the command name).
    /// An argument count mismatch yields the command's usage message.
    pub fn parse(argv: &[String]) -> Result<Command, ShellError> {
        let Some((name, args)) = argv.split_first() else {
            return Err(ShellError::Empty);
        };

        let usage = |text: &'static str, expected: usize| {
            if args.len() == expected {
                Ok(())
            } else {
                Err(ShellError::Usage(text))
            }
        };

        let command = match name.as_str() {
            "findvalidsearches" => {
                usage("usage: findvalidsearches searchword partofspeechnum", 2)?;
                Command::FindValidSearches {
                    word: args[0].clone(),
                    pos: number(&args[1])?,
                }
            }
            "bit" => {
                usage("usage: bit bitnum", 1)?;
                Command::Bit {
                    n: number(&args[0])?,
                }
            }
            "search" => {
                usage(
                    "usage: search searchword partofspeechnum searchtypenum sensenum",
                    4,
                )?;
                Command::Search(search_args(args)?)
            }
            "searchtree" => {
                usage(
                    "usage: searchtree searchword partofspeechnum searchtypenum sensenum",
                    4,
                )?;
                Command::SearchTree(search_args(args)?)
            }
            "glosses" => toggle(Toggle::Glosses, "usage: glosses [1 | 0]", args)?,
            "fileinfo" => toggle(Toggle::FileInfo, "usage: fileinfo [1 | 0]", args)?,
            "byteoffset" => toggle(Toggle::ByteOffset, "usage: byteoffset [1 | 0]", args)?,
            "senseflag" => toggle(Toggle::SenseFlag, "usage: senseflag [1 | 0]", args)?,
            "contextualhelp" => {
                usage("usage: contextualhelp partofspeechnum searchtypenum", 2)?;
                Command::ContextualHelp {
                    pos: number(&args[0])?,
                    search: number(&args[1])?,
                }
            }
            "reopendb" => {
                usage("usage: reopendb", 0)?;
                Command::ReopenDb
            }
            "abortsearch" => {
                usage("usage: abortsearch", 0)?;
                Command::AbortSearch
            }
            other => return Err(ShellError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

fn toggle(toggle: Toggle, usage: &'static str, args: &[String]) -> Result<Command, ShellError> {
    if args.len() != 1 {
        return Err(ShellError::Usage(usage));
    }
    Ok(Command::SetToggle {
        toggle,
        on: number(&args[0])? != 0,
    })
}

fn search_args(args: &[String]) -> Result<SearchArgs, ShellError> {
    let sense = number(&args[3])?;
    Ok(SearchArgs {
        word: args[0].clone(),
        pos: number(&args[1])?,
        search: number(&args[2])?,
        sense: u32::try_from(sense).map_err(|_| ShellError::InvalidNumber(args[3].clone()))?,
    })
}

fn number(arg: &str) -> Result<i64, ShellError> {
    arg.trim()
        .parse()
        .map_err(|_| ShellError::InvalidNumber(arg.to_string()))
}

/// Split a command line on whitespace; double quotes group words.
pub fn tokenize(line: &str) -> Result<Vec<String>, ShellError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err(ShellError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
