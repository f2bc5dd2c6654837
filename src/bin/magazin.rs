use graphtasks::tasks::magazin::Magazin;
use graphtasks::tasks::{run, Task};
use graphtasks::util::cli::parse_task_args;
use graphtasks::util::logging;

fn main() -> anyhow::Result<()> {
    let paths = parse_task_args(
        Magazin::NAME,
        "Answers subtree-order successor queries on the warehouse tree",
    );
    logging::init();
    run::<Magazin>(&paths)
}
