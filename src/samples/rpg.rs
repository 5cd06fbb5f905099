// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Character attribute names spelling words.
//!
//! Each level of the tree picks one attribute that has not been used yet and
//! one of its synonyms, with the rule that no two picks share an initial.
//! A full branch is an ordering of attributes; its initials spell a word.

use std::collections::BTreeSet;
use std::convert::Infallible;

use tracing::info;

use crate::engine::{sink_fn, ChildSource, ChildrenSource};
use crate::views::RecursiveDfs;

/// Synonyms for each character attribute.
pub const ATTRIBUTE_VALUES: &[&[&str]] = &[
    &["Strength", "Body", "Might", "Brawn"],
    &["Perception", "Alertness", "Awareness", "Cautiousness"],
    &[
        "Constitution",
        "Stamina",
        "Endurance",
        "Vitality",
        "Health",
        "Defense",
        "Resistance",
        "Fortitude",
        "Resilience",
    ],
    &["Charisma", "Presence", "Charm", "Social", "Niceness"],
    &["Intelligence", "Intellect", "Mind", "Knowledge"],
    &["Dexterity", "Agility", "Reflexes", "Quickness", "Speed"],
    &["Luck", "Fate", "Chance"],
];

/// One pick: attribute `attribute` named by its `value`-th synonym.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeVariant {
    pub attribute: usize,
    pub value: usize,
}

/// Child source over an attribute table.
#[derive(Debug, Clone, Copy)]
pub struct AttributeTable<'a> {
    values: &'a [&'a [&'a str]],
}

impl Default for AttributeTable<'static> {
    fn default() -> Self {
        Self::new(ATTRIBUTE_VALUES)
    }
}

impl<'a> AttributeTable<'a> {
    pub fn new(values: &'a [&'a [&'a str]]) -> Self {
        Self { values }
    }

    /// Number of attributes, which is also the length of a full branch.
    pub fn attributes(&self) -> usize {
        self.values.len()
    }

    pub fn name(&self, variant: AttributeVariant) -> &'a str {
        self.values[variant.attribute][variant.value]
    }

    fn initial(&self, variant: AttributeVariant) -> Option<char> {
        self.name(variant).chars().next()
    }

    /// Picks allowed after `branch`, attribute-major.
    fn candidates<'b>(
        &'b self,
        branch: &'b [AttributeVariant],
    ) -> impl Iterator<Item = AttributeVariant> + 'b {
        (0..self.values.len())
            .filter(move |&attribute| branch.iter().all(|v| v.attribute != attribute))
            .flat_map(move |attribute| {
                (0..self.values[attribute].len())
                    .map(move |value| AttributeVariant { attribute, value })
            })
            .filter(move |&candidate| {
                let initial = self.initial(candidate);
                branch.iter().all(|&v| self.initial(v) != initial)
            })
    }

    /// Initials of a branch, lowercased.
    pub fn word(&self, branch: &[AttributeVariant]) -> String {
        branch
            .iter()
            .filter_map(|&v| self.initial(v))
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }

    /// First three letters of every name, joined by dashes.
    pub fn abbreviation(&self, branch: &[AttributeVariant]) -> String {
        branch
            .iter()
            .map(|&v| {
                let name = self.name(v);
                name.get(..3).unwrap_or(name)
            })
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl ChildSource<(), AttributeVariant> for AttributeTable<'_> {
    type Error = Infallible;

    fn child_at(
        &mut self,
        _: &(),
        branch: &[AttributeVariant],
        index: usize,
    ) -> Result<Option<AttributeVariant>, Infallible> {
        Ok(self.candidates(branch).nth(index))
    }
}

impl ChildrenSource<(), AttributeVariant> for AttributeTable<'_> {
    type Children = Vec<AttributeVariant>;

    fn children(&mut self, _: &(), branch: &[AttributeVariant]) -> Option<Self::Children> {
        Some(self.candidates(branch).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpgMatch {
    pub word: String,
    pub abbreviation: String,
}

#[derive(Debug, Clone, Default)]
pub struct RpgReport {
    /// Number of full branches visited.
    pub total: u64,
    /// Dictionary words spelled, first spelling of each, in traversal order.
    pub found: Vec<RpgMatch>,
}

/// Find dictionary words spelled by the initials of a full attribute
/// ordering. Only dictionary words as long as the table has attributes are
/// considered.
pub fn find_words(table: AttributeTable<'_>, dictionary: &[String]) -> RpgReport {
    let length = table.attributes();
    let allowed: BTreeSet<&str> = dictionary
        .iter()
        .map(String::as_str)
        .filter(|word| word.chars().count() == length)
        .collect();

    let mut report = RpgReport::default();
    let mut seen = BTreeSet::new();
    let sink = sink_fn(|_: &(), branch: &[AttributeVariant]| {
        report.total += 1;
        let word = table.word(branch);
        if allowed.contains(word.as_str()) && seen.insert(word.clone()) {
            report.found.push(RpgMatch {
                word,
                abbreviation: table.abbreviation(branch),
            });
        }
    });

    let mut dfs = RecursiveDfs::new((), table, sink, Some(length));
    match dfs.run() {
        Ok(()) => {}
        Err(never) => match never {},
    }
    drop(dfs);

    info!(total = report.total, found = report.found.len(), "attribute search done");
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &[&[&str]] = &[&["Alpha", "Beta"], &["Apple", "Cherry"], &["Delta"]];

    #[test]
    fn test_candidates_skip_used_attributes_and_initials() {
        let mut table = AttributeTable::new(SMALL);
        let branch = [AttributeVariant {
            attribute: 0,
            value: 0,
        }];
        let children = table.children(&(), &branch).unwrap();
        // Apple shares Alpha's initial
        assert_eq!(
            children,
            vec![
                AttributeVariant {
                    attribute: 1,
                    value: 1
                },
                AttributeVariant {
                    attribute: 2,
                    value: 0
                },
            ]
        );
        assert_eq!(table.child_at(&(), &branch, 1), Ok(Some(children[1])));
        assert_eq!(table.child_at(&(), &branch, 2), Ok(None));
    }

    #[test]
    fn test_word_and_abbreviation() {
        let table = AttributeTable::default();
        let branch = [
            AttributeVariant {
                attribute: 6,
                value: 0,
            },
            AttributeVariant {
                attribute: 0,
                value: 0,
            },
        ];
        assert_eq!(table.word(&branch), "ls");
        assert_eq!(table.abbreviation(&branch), "Luc-Str");
    }

    #[test]
    fn test_find_words_small_table() {
        let dictionary: Vec<String> = ["bcd", "adc", "acd", "xyz", "bc"]
            .into_iter()
            .map(String::from)
            .collect();
        let report = find_words(AttributeTable::new(SMALL), &dictionary);
        let words: Vec<&str> = report.found.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(words, ["acd", "adc", "bcd"]);
        assert_eq!(report.found[0].abbreviation, "Alp-Che-Del");
    }
}
