// src/core/table.rs
use std::collections::HashMap;

use crate::core::rules::MappingRule;
use crate::core::script;
use crate::core::types::LetterPosition;
use crate::error::RulesError;

/// A trie node; one Latin output slot per position constraint.
struct TableNode {
    children: HashMap<char, usize>,
    outputs: [Option<String>; LetterPosition::COUNT],
}

impl TableNode {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            outputs: [None, None, None, None],
        }
    }
}

/// Mapping rules compiled for lookup: a trie keyed by the source grapheme's
/// characters. Walking as deep as the input allows and taking the deepest
/// node with an output realizes longest-match-first; inside a node the
/// position-specific slot beats the `Any` slot.
///
/// Immutable once built. O(k) insert and lookup in the grapheme length.
pub struct MappingTable {
    nodes: Vec<TableNode>,
    max_depth: usize,
}

impl MappingTable {
    pub fn from_rules(rules: &[MappingRule]) -> Self {
        let mut table = Self {
            nodes: vec![TableNode::new()],
            max_depth: 0,
        };
        for rule in rules {
            table.insert(rule);
        }
        table
    }

    fn insert(&mut self, rule: &MappingRule) {
        let mut node_idx = 0;
        let mut depth = 0;
        for ch in rule.source.chars() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&ch) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(TableNode::new());
                self.nodes[node_idx].children.insert(ch, new_node_id);
                new_node_id
            };
            node_idx = next_idx;
            depth += 1;
        }
        self.max_depth = self.max_depth.max(depth);

        let slot = rule.position.index();
        if self.nodes[node_idx].outputs[slot].is_some() {
            log::debug!(
                "mapping rule {:?} ({}) replaces an earlier rule",
                rule.source,
                rule.position
            );
        }
        self.nodes[node_idx].outputs[slot] = Some(rule.output.clone());
    }

    /// Longest match at the head of `remaining` for the given position.
    /// Returns the number of characters consumed and the Latin output.
    pub fn lookup(&self, remaining: &[char], position: LetterPosition) -> Option<(usize, &str)> {
        let mut node_idx = 0;
        let mut best = None;
        for (depth, &ch) in remaining.iter().take(self.max_depth).enumerate() {
            match self.nodes[node_idx].children.get(&ch) {
                Some(&next_idx) => node_idx = next_idx,
                None => break,
            }
            let node = &self.nodes[node_idx];
            let output = node.outputs[position.index()]
                .as_deref()
                .or(node.outputs[LetterPosition::Any.index()].as_deref());
            if let Some(output) = output {
                best = Some((depth + 1, output));
            }
        }
        best
    }

    /// Check the table is total over the classifier's inventory: every
    /// letter and diacritic must resolve on its own in every reachable
    /// position. Single-character resolution is required because a longer
    /// rule cannot vouch for a grapheme next to arbitrary neighbours.
    pub fn validate(&self) -> Result<(), RulesError> {
        use LetterPosition::{Final, Initial, Medial};
        for &c in script::LETTERS.iter().chain(script::DIACRITICS.iter()) {
            for position in [Initial, Medial, Final] {
                if self.lookup(&[c], position).is_none() {
                    return Err(RulesError::Coverage {
                        letter: c,
                        position,
                    });
                }
            }
        }
        Ok(())
    }
}
