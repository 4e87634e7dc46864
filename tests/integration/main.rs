//! Integration tests for the playreel binary

mod helpers;

mod config_test;
mod extract_test;
mod frame_test;
mod play_test;
