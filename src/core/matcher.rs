//! Query matcher - name lookups and result pagination.
//!
//! Matching is an unanchored, case-insensitive regex search against one text
//! field of each record. There is no ranking: hits come back in collection
//! order. The caller decides what to do with zero, one or many hits through
//! [`Lookup`].

use crate::errors::Result;
use regex::{Regex, RegexBuilder};

/// Maximum entries per selection page.
pub const PAGE_SIZE: usize = 20;

/// A compiled user pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles `pattern` case-insensitively.
    ///
    /// # Errors
    /// Returns `Error::Pattern` if the pattern is not a valid regex.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { regex })
    }

    /// Matches `text` literally, for autocomplete where the input is a prefix
    /// the user is still typing rather than a pattern.
    #[must_use]
    pub fn literal(text: &str) -> Self {
        Self::new(&regex::escape(text)).unwrap_or_else(|_| Self::match_all())
    }

    fn match_all() -> Self {
        Self {
            regex: Regex::new("").unwrap_or_else(|_| unreachable!("empty regex always compiles")),
        }
    }

    /// True when `text` is non-empty and contains a match.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        !text.is_empty() && self.regex.is_match(text)
    }

    /// Records whose `field` matches, in input order.
    pub fn filter<'a, T, I, F>(&self, items: I, field: F) -> Vec<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
        F: Fn(&T) -> &str,
        T: 'a + ?Sized,
    {
        items
            .into_iter()
            .filter(|item| self.is_match(field(item)))
            .collect()
    }
}

/// Compiles `pattern` and returns every record whose `field` matches.
///
/// An empty pattern matches every record with a non-empty field.
///
/// # Errors
/// Returns `Error::Pattern` if the pattern does not compile.
pub fn find<'a, T, I, F>(items: I, field: F, pattern: &str) -> Result<Vec<&'a T>>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> &str,
    T: 'a + ?Sized,
{
    Ok(Pattern::new(pattern)?.filter(items, field))
}

/// What a search produced, shaped for the three ways results are shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// No record matched
    NotFound,
    /// Exactly one record matched
    Single(T),
    /// Several matched; pages of at most [`PAGE_SIZE`] in match order
    Many(Vec<Vec<T>>),
}

impl<T> Lookup<T> {
    /// Classifies a match list.
    #[must_use]
    pub fn from_matches(mut matches: Vec<T>) -> Self {
        match matches.len() {
            0 => Self::NotFound,
            1 => matches
                .pop()
                .map_or(Self::NotFound, Self::Single),
            _ => Self::Many(paginate(matches, PAGE_SIZE)),
        }
    }

    /// Total number of matches.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::NotFound => 0,
            Self::Single(_) => 1,
            Self::Many(pages) => pages.iter().map(Vec::len).sum(),
        }
    }

    /// True for [`Lookup::NotFound`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Compiles `pattern`, searches `field`, and classifies the result.
///
/// # Errors
/// Returns `Error::Pattern` if the pattern does not compile.
pub fn lookup<'a, T, I, F>(items: I, field: F, pattern: &str) -> Result<Lookup<&'a T>>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> &str,
    T: 'a + ?Sized,
{
    find(items, field, pattern).map(Lookup::from_matches)
}

/// Splits `items` into consecutive pages of at most `page_size` entries.
/// A zero page size is treated as one.
#[must_use]
pub fn paginate<T>(items: Vec<T>, page_size: usize) -> Vec<Vec<T>> {
    let page_size = page_size.max(1);
    let mut pages = Vec::with_capacity(items.len().div_ceil(page_size));
    let mut iter = items.into_iter().peekable();
    while iter.peek().is_some() {
        pages.push(iter.by_ref().take(page_size).collect());
    }
    pages
}
