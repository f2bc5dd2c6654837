//! The four problems, each behind the same [`Task`] interface.

pub mod ferate;
pub mod magazin;
pub mod supercomputer;
pub mod teleportare;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

use anyhow::Context;
use tracing::{info, warn};

use crate::data_handling::{InputError, InputFile, Tokens};
use crate::util::cli::TaskPaths;

/// A batch problem: parse an instance, compute an answer, print it.
pub trait Task {
    /// base name of the default input/output files
    const NAME: &'static str;

    type Instance;
    type Answer;

    fn parse(tokens: &mut Tokens<'_>) -> Result<Self::Instance, InputError>;

    fn solve(instance: &Self::Instance) -> Result<Self::Answer, InputError>;

    fn write_answer<W: Write>(out: &mut W, answer: &Self::Answer) -> std::io::Result<()>;
}

/// parses and solves an instance held in memory
pub fn solve_str<T: Task>(input: &str) -> Result<T::Answer, InputError> {
    let instance = T::parse(&mut Tokens::new(input.as_bytes()))?;
    T::solve(&instance)
}

/// renders an answer the way it is written to the output file
pub fn render<T: Task>(answer: &T::Answer) -> String {
    let mut out = Vec::new();
    T::write_answer(&mut out, answer).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&out).into_owned()
}

/// reads `paths.input`, solves it and writes `paths.output`
pub fn run<T: Task>(paths: &TaskPaths) -> anyhow::Result<()> {
    let mut start = Instant::now();
    let input = InputFile::open(&paths.input)
        .with_context(|| format!("could not open {}", paths.input.display()))?;
    let mut tokens = input.tokens();
    let instance = T::parse(&mut tokens)
        .with_context(|| format!("could not parse {}", paths.input.display()))?;
    if !tokens.is_exhausted() {
        warn!(
            task = T::NAME,
            "ignoring trailing data in {}",
            paths.input.display()
        );
    }
    info!(
        task = T::NAME,
        bytes = input.len(),
        "read instance in {:?}",
        start.elapsed()
    );

    start = Instant::now();
    let answer = T::solve(&instance)
        .with_context(|| format!("{} has no valid answer", paths.input.display()))?;
    info!(task = T::NAME, "solved in {:?}", start.elapsed());

    let file = File::create(&paths.output)
        .with_context(|| format!("could not create {}", paths.output.display()))?;
    let mut out = BufWriter::new(file);
    T::write_answer(&mut out, &answer)
        .and_then(|_| out.flush())
        .with_context(|| format!("could not write {}", paths.output.display()))?;

    Ok(())
}
