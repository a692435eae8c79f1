//! WordNet-style lookups that fold a word's inflected and base forms into a
//! single answer, behind a small command shell.

pub mod config;
pub mod lexicon;
pub mod lookup;
pub mod shell;
pub mod tree;
