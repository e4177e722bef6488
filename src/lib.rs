//! ascend: progressive selection expansion for markdown documents.
//!
//! Each invocation grows every active selection one step along the hierarchy
//! line → heading section → parent section → whole note. Headings are the only
//! structure recognised; everything is recomputed from the document text on
//! every call.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod buffer;
pub mod classify;
pub mod command;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod expand;
pub mod heading;
pub mod input;
pub mod position;
pub mod section;
pub mod smart;
pub mod ui;
