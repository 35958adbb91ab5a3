use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "codeshield",
    version,
    about = "Source file intake and validation for the CodeShield analysis pipeline",
    after_help = "Accepted file types: .py, .java, .js, .cpp. Directories are walked \
                  recursively (respecting .gitignore) and unsupported files are skipped."
)]
pub struct Cli {
    /// Output format override: minified, pretty, or text
    #[arg(long, global = true)]
    pub format: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate files and directories and print the resulting queue.
    ///
    /// Duplicates (same name and size) are skipped. Rejected files stay in
    /// the queue with an `invalid` status.
    Check {
        /// Files or directories to add
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Validate, then submit the accepted files for analysis
    Scan {
        /// Files or directories to add
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// List all accepted file extensions and their languages.
    Supported,

    /// Interactive session on stdin with a single queue.
    ///
    /// Commands: add <path>..., dir <path>, remove <id>, clear, list,
    /// summary, scan, help, quit.
    Session,
}

/// One line of input in an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Add(Vec<String>),
    Dir(String),
    Remove(String),
    Clear,
    List,
    Summary,
    Scan,
    Help,
    Quit,
}

/// Help text printed by the `help` session command.
pub const SESSION_HELP: &str = "\
add <path>...   validate files or directories as one batch
dir <path>      add the supported files of a directory
remove <id>     remove a queued file
clear           empty the queue
list            print the queue
summary         print queue counts
scan            submit the accepted files
quit            leave the session";

/// Parse a session line. Blank lines yield `Ok(None)`.
pub fn parse_session_line(line: &str) -> Result<Option<SessionCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let args: Vec<String> = words.map(str::to_string).collect();

    let cmd = match verb {
        "add" if !args.is_empty() => SessionCommand::Add(args),
        "dir" if args.len() == 1 => SessionCommand::Dir(args[0].clone()),
        "remove" | "rm" if args.len() == 1 => SessionCommand::Remove(args[0].clone()),
        "clear" => SessionCommand::Clear,
        "list" | "ls" => SessionCommand::List,
        "summary" => SessionCommand::Summary,
        "scan" => SessionCommand::Scan,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        "add" | "dir" | "remove" | "rm" => return Err(format!("wrong arguments for `{verb}`")),
        other => return Err(format!("unknown command `{other}` (try `help`)")),
    };
    Ok(Some(cmd))
}
