//! # ace-playbook
//!
//! The strategy memory of the ACE loop: a single JSON document of core
//! directives, named strategies, and de-duplicated lessons, rendered to a
//! text block for prompt injection and rewritten whole on every mutation.

pub mod playbook;

pub use playbook::Playbook;
