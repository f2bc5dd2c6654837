use graphtasks::tasks::ferate::Ferate;
use graphtasks::tasks::{run, Task};
use graphtasks::util::cli::parse_task_args;
use graphtasks::util::logging;

fn main() -> anyhow::Result<()> {
    let paths = parse_task_args(
        Ferate::NAME,
        "Minimum number of new rails so every station is reachable from the source",
    );
    logging::init();
    run::<Ferate>(&paths)
}
