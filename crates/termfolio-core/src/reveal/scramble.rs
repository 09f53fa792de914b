//! Frame-driven text scramble
//!
//! Each character position gets its own start and end frame. Before its start
//! a position shows the old character, between start and end it flickers
//! through random glyphs (settling on the target most of the time), and from
//! its end onward it shows the target.

use rand::Rng;

const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%&";

/// Frames before a position may start scrambling (exclusive upper bound)
const MAX_START_FRAME: u32 = 40;
/// Extra frames a position keeps scrambling after its start (exclusive upper bound)
const MAX_SCRAMBLE_FRAMES: u32 = 40;
/// Chance of showing a random glyph instead of the target while scrambling
const GLITCH_CHANCE: f64 = 0.28;

#[derive(Debug, Clone)]
struct Slot {
    from: Option<char>,
    to: Option<char>,
    start: u32,
    end: u32,
}

#[derive(Debug, Clone)]
pub struct Scramble {
    slots: Vec<Slot>,
    frame: u32,
    target: String,
}

impl Scramble {
    /// Scramble from `from` to `to` using the thread-local RNG
    pub fn new(from: &str, to: &str) -> Self {
        Self::with_rng(from, to, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(from: &str, to: &str, rng: &mut R) -> Self {
        let from: Vec<char> = from.chars().collect();
        let to_chars: Vec<char> = to.chars().collect();
        let len = from.len().max(to_chars.len());

        let slots = (0..len)
            .map(|i| {
                let start = rng.gen_range(0..MAX_START_FRAME);
                let end = start + rng.gen_range(0..MAX_SCRAMBLE_FRAMES);
                Slot {
                    from: from.get(i).copied(),
                    to: to_chars.get(i).copied(),
                    start,
                    end,
                }
            })
            .collect();

        Self {
            slots,
            frame: 0,
            target: to.to_string(),
        }
    }

    /// An already finished scramble showing `text`
    pub fn settled(text: &str) -> Self {
        Self {
            slots: Vec::new(),
            frame: 0,
            target: text.to_string(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| self.frame >= slot.end)
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        if !self.is_complete() {
            self.frame += 1;
        }
    }

    /// Render the current frame
    pub fn render<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        if self.is_complete() {
            return self.target.clone();
        }

        let mut output = String::with_capacity(self.slots.len());
        for slot in &self.slots {
            if self.frame >= slot.end {
                output.extend(slot.to);
            } else if self.frame >= slot.start {
                match slot.to {
                    Some(c) if !rng.gen_bool(GLITCH_CHANCE) => output.push(c),
                    _ => output.push(random_glyph(rng)),
                }
            } else {
                output.extend(slot.from);
            }
        }
        output
    }
}

fn random_glyph<R: Rng + ?Sized>(rng: &mut R) -> char {
    GLYPHS[rng.gen_range(0..GLYPHS.len())] as char
}
