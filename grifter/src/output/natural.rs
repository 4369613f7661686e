//! Natural ("human") string ordering.
//!
//! Runs of ASCII digits compare by numeric value, everything else compares
//! character by character, so `sw2` sorts before `sw10`.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

struct Chunks<'a> {
    source: &'a str,
    offset: usize,
    chars: Peekable<Chars<'a>>,
}

impl<'a> Chunks<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            chars: source.chars().peekable(),
        }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = *self.chars.peek()?;
        let digits = first.is_ascii_digit();
        let start = self.offset;

        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_digit() != digits {
                break;
            }
            self.offset += c.len_utf8();
            self.chars.next();
        }

        let text = &self.source[start..self.offset];
        Some(if digits {
            Chunk::Digits(text)
        } else {
            Chunk::Text(text)
        })
    }
}

fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');
    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
        // "01" after "1", so distinct strings never compare equal
        .then_with(|| a.len().cmp(&b.len()))
}

/// Compares two strings in natural order.
///
/// # Examples
///
/// ```
/// use grifter::output::natural::natural_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(natural_cmp("sw2", "sw10"), Ordering::Less);
/// assert_eq!(natural_cmp("eth10", "eth9"), Ordering::Greater);
/// assert_eq!(natural_cmp("a", "a"), Ordering::Equal);
/// ```
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);

    loop {
        let ordering = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Chunk::Digits(x)), Some(Chunk::Digits(y))) => cmp_digits(x, y),
            (Some(Chunk::Text(x) | Chunk::Digits(x)), Some(Chunk::Text(y) | Chunk::Digits(y))) => {
                x.cmp(y)
            }
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

/// Sorts strings in natural order.
pub fn natural_sort<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
}
