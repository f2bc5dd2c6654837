//! command line handling shared by the task binaries

use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command};

/// where a task reads its instance and writes its answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl TaskPaths {
    /// `<name>.in` and `<name>.out` in the working directory
    pub fn default_for(name: &str) -> TaskPaths {
        TaskPaths {
            input: PathBuf::from(format!("{name}.in")),
            output: PathBuf::from(format!("{name}.out")),
        }
    }

    /// explicit `--input` / `--output` win over the fixed names
    pub fn from_matches(name: &str, matches: &ArgMatches) -> TaskPaths {
        let defaults = TaskPaths::default_for(name);
        let input = matches
            .get_one::<String>("input")
            .map(PathBuf::from)
            .unwrap_or(defaults.input);
        let output = matches
            .get_one::<String>("output")
            .map(PathBuf::from)
            .unwrap_or(defaults.output);
        TaskPaths { input, output }
    }
}

/// builds the `--input` / `--output` command for a task binary
pub fn task_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .version(env!("CARGO_PKG_VERSION"))
        .about(about)
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("FILE")
                .help("Problem instance to read (default: <task>.in)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .help("File the answer is written to (default: <task>.out)"),
        )
}

/// parses the process arguments for a task binary
pub fn parse_task_args(name: &'static str, about: &'static str) -> TaskPaths {
    TaskPaths::from_matches(name, &task_command(name, about).get_matches())
}
