#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod config;
mod core;
mod gui;

fn main() {
    gui::run();
}
