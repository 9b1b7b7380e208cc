//! Shared utility modules used across Ranseur components.

pub mod distance;
