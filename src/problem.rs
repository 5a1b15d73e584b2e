//! Problem definition and evaluators for the Set Covering Problem.

use crate::error::{Result, ScpError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Represents an SCP instance.
///
/// `coverage[e]` lists the subsets that cover element `e`; `members[s]` is the
/// inverse relation, the elements covered by subset `s`. Both are sorted and
/// free of duplicates.
///
/// Deserialization goes through [`Problem::new`], so `members` is always
/// rebuilt from `coverage` and never read from the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ProblemData")]
pub struct Problem {
    pub name: String,
    pub element_count: usize,
    pub subset_count: usize,
    pub costs: Vec<u64>,
    pub coverage: Vec<Vec<usize>>,
    pub members: Vec<Vec<usize>>,
}

impl Problem {
    /// Create a new SCP problem.
    ///
    /// Fails if `costs` or `coverage` disagree with the declared sizes, or if a
    /// coverage entry names a subset id outside `0..subset_count`.
    pub fn new(
        element_count: usize,
        subset_count: usize,
        costs: Vec<u64>,
        coverage: Vec<Vec<usize>>,
    ) -> Result<Self> {
        if costs.len() != subset_count {
            return Err(ScpError::InvalidConfiguration(format!(
                "expected {} costs, got {}",
                subset_count,
                costs.len()
            )));
        }
        if coverage.len() != element_count {
            return Err(ScpError::InvalidConfiguration(format!(
                "expected {} coverage entries, got {}",
                element_count,
                coverage.len()
            )));
        }

        let mut members = vec![Vec::new(); subset_count];
        let mut normalized = Vec::with_capacity(element_count);

        for (element, subsets) in coverage.into_iter().enumerate() {
            let mut subsets = subsets;
            subsets.sort_unstable();
            subsets.dedup();

            for &subset in &subsets {
                if subset >= subset_count {
                    return Err(ScpError::InvalidConfiguration(format!(
                        "element {} references subset {} but there are only {} subsets",
                        element, subset, subset_count
                    )));
                }
                members[subset].push(element);
            }

            normalized.push(subsets);
        }

        Ok(Problem {
            name: String::new(),
            element_count,
            subset_count,
            costs,
            coverage: normalized,
            members,
        })
    }

    /// Attach a display name, used in reports.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sum of the costs of the given subsets.
    pub fn cost<'a, I>(&self, subset_ids: I) -> u64
    where
        I: IntoIterator<Item = &'a usize>,
    {
        subset_ids.into_iter().map(|&id| self.costs[id]).sum()
    }

    /// Check whether the given subsets cover every element.
    ///
    /// This is a full O(m * |coverage|) pass and is not incremental.
    pub fn is_feasible(&self, subset_ids: &BTreeSet<usize>) -> bool {
        self.is_covered_by(|id| subset_ids.contains(&id))
    }

    /// Check coverage against an arbitrary membership predicate.
    pub fn is_covered_by<F>(&self, selected: F) -> bool
    where
        F: Fn(usize) -> bool,
    {
        self.coverage
            .iter()
            .all(|subsets| subsets.iter().any(|&id| selected(id)))
    }

    /// Elements that lose all cover when `removed` is taken out of `subset_ids`.
    pub fn uncovered_without(&self, subset_ids: &BTreeSet<usize>, removed: usize) -> Vec<usize> {
        self.members[removed]
            .iter()
            .copied()
            .filter(|&element| {
                !self.coverage[element]
                    .iter()
                    .any(|&id| id != removed && subset_ids.contains(&id))
            })
            .collect()
    }

    /// Check that a cover exists at all.
    pub fn ensure_coverable(&self) -> Result<()> {
        match self.coverage.iter().position(|subsets| subsets.is_empty()) {
            Some(element) => Err(ScpError::InfeasibleInstance { element }),
            None => Ok(()),
        }
    }

    /// Parse an instance in the OR-Library text format.
    ///
    /// The format is a flat stream of whitespace separated integers: `m n`,
    /// then `n` costs, then for every element a count followed by that many
    /// 1-indexed subset ids.
    pub fn parse(input: &str) -> Result<Self> {
        let mut tokens = Tokens::new(input);

        let element_count = tokens.next_usize("element count")?;
        let subset_count = tokens.next_usize("subset count")?;

        let mut costs = Vec::with_capacity(subset_count);
        for _ in 0..subset_count {
            costs.push(tokens.next_u64("subset cost")?);
        }

        let mut coverage = Vec::with_capacity(element_count);
        for _ in 0..element_count {
            let count = tokens.next_usize("covering subset count")?;
            let mut subsets = Vec::with_capacity(count);

            for _ in 0..count {
                let position = tokens.position + 1;
                let id = tokens.next_usize("subset id")?;
                if id == 0 || id > subset_count {
                    return Err(ScpError::Parse {
                        position,
                        message: format!("subset id {} outside 1..={}", id, subset_count),
                    });
                }
                subsets.push(id - 1);
            }

            coverage.push(subsets);
        }

        Problem::new(element_count, subset_count, costs, coverage)
    }

    /// Load a problem from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Problem::parse(&content)?.with_name(name))
    }
}

/// Serialized form of a [`Problem`] without the derived `members` relation.
#[derive(Deserialize)]
struct ProblemData {
    #[serde(default)]
    name: String,
    element_count: usize,
    subset_count: usize,
    costs: Vec<u64>,
    coverage: Vec<Vec<usize>>,
}

impl TryFrom<ProblemData> for Problem {
    type Error = ScpError;

    fn try_from(data: ProblemData) -> Result<Self> {
        Ok(
            Problem::new(data.element_count, data.subset_count, data.costs, data.coverage)?
                .with_name(data.name),
        )
    }
}

/// Whitespace tokenizer that remembers how many tokens it has consumed.
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Tokens {
            inner: input.split_whitespace(),
            position: 0,
        }
    }

    fn next_token(&mut self, what: &str) -> Result<&'a str> {
        self.position += 1;
        self.inner.next().ok_or_else(|| ScpError::Parse {
            position: self.position,
            message: format!("unexpected end of input, expected {}", what),
        })
    }

    fn next_u64(&mut self, what: &str) -> Result<u64> {
        let token = self.next_token(what)?;
        token.parse::<u64>().map_err(|_| ScpError::Parse {
            position: self.position,
            message: format!("invalid {} '{}'", what, token),
        })
    }

    fn next_usize(&mut self, what: &str) -> Result<usize> {
        let token = self.next_token(what)?;
        token.parse::<usize>().map_err(|_| ScpError::Parse {
            position: self.position,
            message: format!("invalid {} '{}'", what, token),
        })
    }
}
