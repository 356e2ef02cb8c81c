//! Letter registry: the 26 light-up entries of the alphabet wall.

/// Visual capability for one letter on the wall. Implementations must be
/// idempotent: setting the same flag twice looks the same as setting it once.
pub trait VisualHandle {
    /// Highlight the letter's container.
    fn set_active(&self, on: bool);
    /// Light the letter's bulb.
    fn set_lit(&self, on: bool);
}

pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LETTER_COUNT: usize = 26;

pub struct LetterEntry<H> {
    pub letter: char,
    handle: H,
    active: bool,
    lit: bool,
}

impl<H: VisualHandle> LetterEntry<H> {
    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    fn set_active(&mut self, on: bool) {
        self.active = on;
        self.handle.set_active(on);
    }

    fn set_lit(&mut self, on: bool) {
        self.lit = on;
        self.handle.set_lit(on);
    }
}

/// Maps `A`..=`Z` (any case) to its slot; anything else is not on the wall.
#[inline]
pub fn letter_index(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| (upper as u8 - b'A') as usize)
}

pub struct LetterRegistry<H> {
    entries: Vec<LetterEntry<H>>,
}

impl<H: VisualHandle> LetterRegistry<H> {
    /// Create one entry per letter, A to Z, asking `make` for each handle.
    pub fn build(mut make: impl FnMut(char) -> H) -> Self {
        let entries = ALPHABET
            .chars()
            .map(|letter| LetterEntry {
                letter,
                handle: make(letter),
                active: false,
                lit: false,
            })
            .collect();
        Self { entries }
    }

    /// Fallible variant of [`build`](Self::build); stops at the first error.
    pub fn try_build<E>(mut make: impl FnMut(char) -> Result<H, E>) -> Result<Self, E> {
        let mut entries = Vec::with_capacity(LETTER_COUNT);
        for letter in ALPHABET.chars() {
            entries.push(LetterEntry {
                letter,
                handle: make(letter)?,
                active: false,
                lit: false,
            });
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LetterEntry<H>] {
        &self.entries
    }

    pub fn lookup(&self, letter: char) -> Option<&LetterEntry<H>> {
        letter_index(letter).and_then(|i| self.entries.get(i))
    }

    pub fn light_up(&mut self, letter: char) {
        if let Some(entry) = letter_index(letter).and_then(|i| self.entries.get_mut(i)) {
            entry.set_active(true);
            entry.set_lit(true);
        }
    }

    pub fn turn_off(&mut self, letter: char) {
        if let Some(entry) = letter_index(letter).and_then(|i| self.entries.get_mut(i)) {
            entry.set_active(false);
            entry.set_lit(false);
        }
    }

    pub fn turn_off_all(&mut self) {
        for entry in &mut self.entries {
            entry.set_active(false);
            entry.set_lit(false);
        }
    }

    /// Toggle only the bulb of the entry at `index` (used by flicker).
    pub fn set_lit_at(&mut self, index: usize, on: bool) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.set_lit(on);
        }
    }

    /// Letters whose bulb is currently lit, in wall order.
    pub fn lit_letters(&self) -> String {
        self.entries
            .iter()
            .filter(|e| e.lit)
            .map(|e| e.letter)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_index_is_case_insensitive() {
        assert_eq!(letter_index('a'), Some(0));
        assert_eq!(letter_index('A'), Some(0));
        assert_eq!(letter_index('z'), Some(25));
        assert_eq!(letter_index(' '), None);
        assert_eq!(letter_index('1'), None);
        assert_eq!(letter_index('é'), None);
    }
}
