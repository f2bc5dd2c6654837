use graphtasks::tasks::supercomputer::Supercomputer;
use graphtasks::tasks::{run, Task};
use graphtasks::util::cli::parse_task_args;
use graphtasks::util::logging;

fn main() -> anyhow::Result<()> {
    let paths = parse_task_args(
        Supercomputer::NAME,
        "Fewest data set switches needed to run a task DAG",
    );
    logging::init();
    run::<Supercomputer>(&paths)
}
