pub mod alpha_bleed;
pub mod cli;
pub mod commands;
pub mod config;
pub mod icon;
pub mod iconset;
pub mod layout;
pub mod lockfile;
pub mod mask;
