//! CLI entrypoint for godot2ts.

use clap::Parser;
use gd2ts::cli::{run, Args};

fn main() {
    std::process::exit(run(Args::parse()));
}
