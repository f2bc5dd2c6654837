//! Shortest escape through a maze of corridors and periodic portals.
//!
//! Corridors can be walked at any time. A portal only opens at multiples of
//! its period, so whether it can be used depends on the arrival time. Taken
//! modulo the least common multiple `L` of all periods, the arrival time is
//! all that matters for the future, so the search runs over
//! `(room, time mod L)` states and keeps the earliest absolute time per state.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::io::Write;

use tracing::debug;

use crate::data_handling::{InputError, Tokens};
use crate::graph::{IndexT, WeightedGraph};
use crate::tasks::Task;
use crate::util::checked_lcm;

/// time a portal jump takes
pub const PORTAL_COST: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    /// corridors labelled with their walking cost
    pub corridors: WeightedGraph,
    /// portals labelled with their period
    pub portals: WeightedGraph,
}

impl Maze {
    pub fn rooms(&self) -> usize {
        self.corridors.n()
    }

    /// least common multiple of every portal period, 1 without portals
    pub fn cycle_length(&self) -> Result<u64, InputError> {
        self.portals.labels().try_fold(1u64, |acc, period| {
            checked_lcm(acc, period).ok_or(InputError::PeriodsTooLarge {
                nodes: self.rooms(),
            })
        })
    }
}

/// Earliest time room `n-1` can be reached from room 0 starting at time 0.
pub fn shortest_escape(maze: &Maze) -> Result<Option<u64>, InputError> {
    let n = maze.rooms();
    if n == 0 {
        return Ok(None);
    }
    let target = (n - 1) as IndexT;
    let cycle = maze.cycle_length()?;
    let states = (n as u64)
        .checked_mul(cycle)
        .and_then(|s| usize::try_from(s).ok())
        .ok_or(InputError::PeriodsTooLarge { nodes: n })?;
    debug!(
        rooms = n,
        corridors = maze.corridors.edge_count(),
        portals = maze.portals.edge_count(),
        cycle,
        states,
        "searching time-folded maze"
    );

    let state =
        |room: IndexT, time: u64| room as usize * cycle as usize + (time % cycle) as usize;
    let mut best: Vec<u64> = Vec::new();
    best.try_reserve_exact(states)
        .map_err(|_| InputError::PeriodsTooLarge { nodes: n })?;
    best.resize(states, u64::MAX);
    let mut heap: BinaryHeap<Reverse<(u64, IndexT)>> = BinaryHeap::new();

    best[state(0, 0)] = 0;
    heap.push(Reverse((0, 0)));

    while let Some(Reverse((time, room))) = heap.pop() {
        if room == target {
            return Ok(Some(time));
        }
        if best[state(room, time)] < time {
            continue;
        }

        for &(next, cost) in maze.corridors.neighbors(room) {
            // a walk this long can never be the shortest one
            let Some(arrival) = time.checked_add(cost) else {
                continue;
            };
            let slot = state(next, arrival);
            if arrival < best[slot] {
                best[slot] = arrival;
                heap.push(Reverse((arrival, next)));
            }
        }

        for &(next, period) in maze.portals.neighbors(room) {
            if time % period != 0 {
                continue;
            }
            let Some(arrival) = time.checked_add(PORTAL_COST) else {
                continue;
            };
            let slot = state(next, arrival);
            if arrival < best[slot] {
                best[slot] = arrival;
                heap.push(Reverse((arrival, next)));
            }
        }
    }

    Ok(None)
}

pub struct Teleportare;

impl Task for Teleportare {
    const NAME: &'static str = "teleportare";

    type Instance = Maze;
    type Answer = Option<u64>;

    /// `n m k`, `m` corridors `x y w`, then `k` portals `x y p`
    fn parse(tokens: &mut Tokens<'_>) -> Result<Maze, InputError> {
        let n = tokens.count("number of rooms")?;
        let m = tokens.count("number of corridors")?;
        let k = tokens.count("number of portals")?;

        let mut corridors = WeightedGraph::empty(n);
        for _ in 0..m {
            let a = tokens.node(n)?;
            let b = tokens.node(n)?;
            let cost = tokens.next::<u64>("corridor cost")?;
            corridors.add_undirected_edge(a, b, cost);
        }

        let mut portals = WeightedGraph::empty(n);
        for _ in 0..k {
            let a = tokens.node(n)?;
            let b = tokens.node(n)?;
            let period = tokens.next::<u64>("portal period")?;
            if period == 0 {
                return Err(InputError::ZeroPeriod);
            }
            portals.add_undirected_edge(a, b, period);
        }

        Ok(Maze { corridors, portals })
    }

    fn solve(maze: &Maze) -> Result<Option<u64>, InputError> {
        shortest_escape(maze)
    }

    /// the escape time, or `-1` when the exit cannot be reached
    fn write_answer<W: Write>(out: &mut W, answer: &Option<u64>) -> std::io::Result<()> {
        match answer {
            Some(time) => writeln!(out, "{time}"),
            None => writeln!(out, "-1"),
        }
    }
}
