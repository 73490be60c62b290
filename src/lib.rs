// Groundswell: trending-phrase detection for syndicated feeds.
//
// This is the library root. Each module corresponds to a stage of the
// pipeline: feed acquisition, the trend engine, and the serving layer.

pub mod config;
pub mod feeds;
pub mod trends;
pub mod web;
