// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predictive text on a phone keypad.
//!
//! Pressed keys form the levels of the tree and each key's letters are the
//! children at that level, so every full branch is one letter combination.
//! Combinations are looked up as prefixes in a sorted dictionary.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::convert::Infallible;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use tracing::info;

use super::load_dictionary;
use crate::engine::{sink_fn, ChildSource, DfsError, IterativeDfs};
use crate::views::EnumerableDfs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct T9Key {
    pub digit: char,
    pub letters: Vec<char>,
}

impl T9Key {
    pub fn new(digit: char, letters: &str) -> Self {
        Self {
            digit,
            letters: letters.chars().collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct T9Keyboard {
    keys: HashMap<char, T9Key>,
}

impl T9Keyboard {
    /// Build a keypad. Fails if two keys share a digit.
    pub fn new(keys: impl IntoIterator<Item = T9Key>) -> Result<Self, DfsError> {
        let mut map = HashMap::new();
        for key in keys {
            match map.entry(key.digit) {
                Entry::Occupied(_) => return Err(DfsError::DuplicateKey { digit: key.digit }),
                Entry::Vacant(slot) => {
                    slot.insert(key);
                }
            }
        }
        Ok(Self { keys: map })
    }

    /// The usual 2-9 layout.
    pub fn standard() -> Self {
        let keys = [
            T9Key::new('2', "abc"),
            T9Key::new('3', "def"),
            T9Key::new('4', "ghi"),
            T9Key::new('5', "jkl"),
            T9Key::new('6', "mno"),
            T9Key::new('7', "pqrs"),
            T9Key::new('8', "tuv"),
            T9Key::new('9', "wxyz"),
        ];
        Self {
            keys: keys.into_iter().map(|key| (key.digit, key)).collect(),
        }
    }

    pub fn key(&self, digit: char) -> Option<&T9Key> {
        self.keys.get(&digit)
    }

    /// Keys for a digit string. Digits without a key are skipped.
    pub fn translate(&self, digits: &str) -> Vec<T9Key> {
        digits
            .chars()
            .filter_map(|digit| self.key(digit).cloned())
            .collect()
    }
}

/// One letter chosen from one pressed key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct T9Letter {
    pub digit: char,
    pub letter: char,
}

/// Child source over the pressed keys: at depth `d`, the letters of key `d`.
#[derive(Debug, Default, Clone, Copy)]
pub struct T9Letters;

impl<P: AsRef<[T9Key]>> ChildSource<P, T9Letter> for T9Letters {
    type Error = Infallible;

    fn child_at(
        &mut self,
        pressed: &P,
        branch: &[T9Letter],
        index: usize,
    ) -> Result<Option<T9Letter>, Infallible> {
        let letter = pressed.as_ref().get(branch.len()).and_then(|key| {
            key.letters.get(index).map(|&letter| T9Letter {
                digit: key.digit,
                letter,
            })
        });
        Ok(letter)
    }
}

pub fn word_of(branch: &[T9Letter]) -> String {
    branch.iter().map(|l| l.letter).collect()
}

/// Sorted dictionary with prefix lookup.
#[derive(Debug, Clone)]
pub struct T9Matcher {
    words: Vec<String>,
}

impl T9Matcher {
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        let mut words: Vec<String> = words.into_iter().collect();
        words.sort();
        Self { words }
    }

    /// Load one word per line, ignoring blank lines.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DfsError> {
        load_dictionary(path).map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words starting with `prefix`, in sorted order.
    pub fn words_with_prefix(&self, prefix: &str) -> &[String] {
        let start = self.words.partition_point(|word| word.as_str() < prefix);
        let len = self.words[start..]
            .iter()
            .take_while(|word| word.starts_with(prefix))
            .count();
        &self.words[start..start + len]
    }

    /// Lazily list dictionary words whose first letters can be typed with
    /// `pressed`, grouped by letter combination in keypad order.
    pub fn words<'a>(&'a self, pressed: &'a [T9Key]) -> impl Iterator<Item = String> + 'a {
        EnumerableDfs::new(pressed, T9Letters, None)
            .flat_map(move |branch| self.words_with_prefix(&word_of(&branch)).to_vec())
    }
}

/// Run the word search on a background thread.
///
/// `on_word` is called for every match, in the order [`T9Matcher::words`]
/// would yield them. The flag is checked before the first step and between
/// steps; once it is set the thread stops and returns
/// [`DfsError::Cancelled`]. Otherwise it returns the number of matches.
pub fn start_getting_words<F>(
    matcher: Arc<T9Matcher>,
    pressed: Vec<T9Key>,
    mut on_word: F,
    cancel: Arc<AtomicBool>,
) -> JoinHandle<Result<u64, DfsError>>
where
    F: FnMut(&str) + Send + 'static,
{
    std::thread::spawn(move || {
        let mut matches = 0u64;
        let sink = sink_fn(|_: &Vec<T9Key>, branch: &[T9Letter]| {
            for word in matcher.words_with_prefix(&word_of(branch)) {
                matches += 1;
                on_word(word.as_str());
            }
        });
        let keys = pressed.len();
        let mut dfs = IterativeDfs::new(pressed, T9Letters, sink, None);
        info!(keys, "searching words");

        loop {
            if cancel.load(Ordering::Relaxed) {
                let results = dfs.statistics().results();
                info!(results, "word search cancelled");
                return Err(DfsError::Cancelled { results });
            }
            match dfs.advance() {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => match err.into_infallible() {},
            }
        }
        drop(dfs);
        Ok(matches)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> T9Matcher {
        T9Matcher::new(
            ["bad", "ace", "act", "cat", "bat", "bed", "be", "acts"]
                .into_iter()
                .map(String::from),
        )
    }

    #[test]
    fn test_translate_skips_unknown_digits() {
        let keyboard = T9Keyboard::standard();
        let keys = keyboard.translate("2*17");
        let digits: Vec<char> = keys.iter().map(|k| k.digit).collect();
        assert_eq!(digits, vec!['2', '7']);
    }

    #[test]
    fn test_duplicate_digit_rejected() {
        let keys = [T9Key::new('2', "abc"), T9Key::new('3', "def"), T9Key::new('2', "xyz")];
        assert_eq!(
            T9Keyboard::new(keys).err(),
            Some(DfsError::DuplicateKey { digit: '2' })
        );
    }

    #[test]
    fn test_custom_keyboard() {
        let keyboard = T9Keyboard::new([T9Key::new('1', "xy")]).unwrap();
        assert_eq!(keyboard.key('1').map(|k| k.letters.len()), Some(2));
        assert!(keyboard.key('2').is_none());
    }

    #[test]
    fn test_words_with_prefix() {
        let matcher = matcher();
        assert_eq!(matcher.words_with_prefix("ac"), ["ace", "act", "acts"]);
        assert_eq!(matcher.words_with_prefix("act"), ["act", "acts"]);
        assert!(matcher.words_with_prefix("zz").is_empty());
        assert_eq!(matcher.words_with_prefix("").len(), 8);
    }

    #[test]
    fn test_words_in_keypad_order() {
        let matcher = matcher();
        let keys = T9Keyboard::standard().translate("22");
        let words: Vec<String> = matcher.words(&keys).collect();
        assert_eq!(words, ["ace", "act", "acts", "bad", "bat", "cat"]);
    }

    #[test]
    fn test_no_keys_no_words() {
        let matcher = matcher();
        assert_eq!(matcher.words(&[]).count(), 0);
    }
}
