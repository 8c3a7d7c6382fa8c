#![deny(rust_2018_compatibility)]
// #![windows_subsystem = "windows"]

extern crate nalgebra_glm as glm;

mod application;
mod camera;
mod camera_controller;
mod cli;
mod config;
mod data3d;
mod error;
mod gl_wrappers;
mod initializers;
mod input;
mod points;
mod renderer;
mod runtime;
mod shaders_src;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    let result = cli
        .load_config()
        .and_then(|config| runtime::Runtime::new(config).run());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
