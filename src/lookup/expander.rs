use std::collections::HashSet;
use std::iter::FusedIterator;

use crate::lexicon::{LexicalEngine, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Literal,
    Seed,
    Continue,
    Done,
}

/// Forms worth querying for one surface form: the literal input, then each
/// distinct base form the engine offers.
///
/// Owns the engine's morphology cursor for its lifetime; two `Variants` over
/// the same engine must not be advanced in an interleaved fashion.
pub struct Variants<'e, E: LexicalEngine + ?Sized> {
    engine: &'e E,
    surface: String,
    pos: Pos,
    stage: Stage,
    seen: HashSet<String>,
}

/// Start expanding `surface` under `pos`. Nothing is asked of the engine
/// until the second item is requested.
pub fn expand<'e, E: LexicalEngine + ?Sized>(
    engine: &'e E,
    surface: &str,
    pos: Pos,
) -> Variants<'e, E> {
    Variants {
        engine,
        surface: surface.to_string(),
        pos,
        stage: Stage::Literal,
        seen: HashSet::new(),
    }
}

impl<E: LexicalEngine + ?Sized> Iterator for Variants<'_, E> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let candidate = match self.stage {
                Stage::Literal => {
                    self.stage = Stage::Seed;
                    self.seen.insert(self.surface.clone());
                    return Some(self.surface.clone());
                }
                Stage::Seed => {
                    self.stage = Stage::Continue;
                    self.engine.next_morph(Some(self.surface.as_str()), self.pos)
                }
                Stage::Continue => self.engine.next_morph(None, self.pos),
                Stage::Done => return None,
            };

            match candidate {
                None => {
                    self.stage = Stage::Done;
                    return None;
                }
                Some(form) if form.is_empty() || self.seen.contains(&form) => continue,
                Some(form) => {
                    self.seen.insert(form.clone());
                    return Some(form);
                }
            }
        }
    }
}

impl<E: LexicalEngine + ?Sized> FusedIterator for Variants<'_, E> {}
