use thiserror::Error;

use crate::{patrol::Guard, position::Position};

/// Problems found while building or validating a grid.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Expect {0} columns in each row, given {1}.")]
    InconsistentRow(usize, usize),
    #[error("Invalid character({0}) at {1} of given map.")]
    InvalidChar(char, Position),
    #[error("Found multiple guards({0}, {1}) in given laboratory, expect one only.")]
    MultipleGuards(Guard, Guard),
    #[error("There's no guard in given laboratory, but expect one.")]
    NoGuard,
    #[error("Guard({0}) stands outside of given laboratory.")]
    GuardOutside(Guard),
    #[error("Guard({0}) stands on an obstruction.")]
    GuardOnObstruction(Guard),
}
