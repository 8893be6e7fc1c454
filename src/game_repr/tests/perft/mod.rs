use super::*;

mod starting_position;
mod endgame;
