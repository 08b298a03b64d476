// Library exports for the lightcycle game
// The terminal driver and the replay tool both build on these modules

pub mod agent;
pub mod board;
pub mod config;
pub mod debug_logger;
pub mod evaluator;
pub mod game;
pub mod reachability;
pub mod replay;
pub mod search;
pub mod types;
