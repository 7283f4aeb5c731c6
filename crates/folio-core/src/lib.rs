//! Core Folio library (content, motion state machines, config, logging).

pub mod config;
pub mod contact;
pub mod interrupt;
pub mod logging;
pub mod motion;
pub mod profile;
