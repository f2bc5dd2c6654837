use graphtasks::tasks::teleportare::Teleportare;
use graphtasks::tasks::{run, Task};
use graphtasks::util::cli::parse_task_args;
use graphtasks::util::logging;

fn main() -> anyhow::Result<()> {
    let paths = parse_task_args(
        Teleportare::NAME,
        "Shortest escape time through corridors and periodic portals",
    );
    logging::init();
    run::<Teleportare>(&paths)
}
