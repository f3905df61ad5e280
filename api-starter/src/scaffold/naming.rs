//! Naming variants derived from a model identifier
//!
//! Every generated class, file and table name comes from one [`NameVariantSet`].
//! Rules:
//!
//! - segments are split on `_`, `-` and spaces, and at lower-to-upper (or
//!   digit-to-upper) transitions
//! - studly capitalizes the first letter of each segment and keeps the rest
//! - pluralization appends `s`, so `Category` becomes `Categorys`
//!
//! The last rule is a known limitation: irregular nouns and words that are
//! already plural are not special-cased.

use serde::Serialize;

use crate::error::{Result, ScaffoldError};

/// Characters accepted as segment separators in an identifier
const SEPARATORS: &[char] = &['_', '-', ' '];

/// All naming forms of one model identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameVariantSet {
    /// `OrderItem`
    pub studly: String,
    /// `order_item`
    pub snake: String,
    /// `OrderItems`
    pub plural: String,
    /// `orderItem`
    pub camel: String,
    /// `orderItems`
    pub plural_camel: String,
    /// `order-item`
    pub kebab: String,
    /// `order_items`
    pub table: String,
}

impl NameVariantSet {
    /// Derive every naming variant from a model identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use api_starter::scaffold::naming::NameVariantSet;
    ///
    /// let names = NameVariantSet::derive("order_item").unwrap();
    /// assert_eq!(names.studly, "OrderItem");
    /// assert_eq!(names.table, "order_items");
    /// assert_eq!(names.plural_camel, "orderItems");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidIdentifier`] when the identifier is
    /// blank, starts with a digit, or contains characters other than ASCII
    /// letters, digits and separators.
    pub fn derive(identifier: &str) -> Result<Self> {
        validate(identifier)?;

        let studly = to_studly(identifier);
        let snake = to_snake(&studly);
        let plural = pluralize(&studly);
        let table = pluralize(&snake);

        Ok(Self {
            camel: lcfirst(&studly),
            plural_camel: lcfirst(&plural),
            kebab: snake.replace('_', "-"),
            studly,
            snake,
            plural,
            table,
        })
    }

    /// URL segment used for resource routes (`order-items`)
    #[must_use]
    pub fn route_name(&self) -> String {
        pluralize(&self.kebab)
    }
}

fn validate(identifier: &str) -> Result<()> {
    let invalid = |reason| ScaffoldError::InvalidIdentifier {
        identifier: identifier.to_string(),
        reason,
    };

    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return Err(invalid("must not be empty"));
    }

    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || SEPARATORS.contains(&c))
    {
        return Err(invalid(
            "only ASCII letters, digits, '_', '-' and spaces are allowed",
        ));
    }

    match trimmed.chars().find(char::is_ascii_alphanumeric) {
        None => Err(invalid("must contain at least one letter")),
        Some(c) if c.is_ascii_digit() => Err(invalid("must not start with a digit")),
        Some(_) => Ok(()),
    }
}

/// Split an identifier into segments at separators and case transitions
fn segments(input: &str) -> Vec<&str> {
    let mut out = Vec::new();

    for chunk in input.split(SEPARATORS).filter(|s| !s.is_empty()) {
        let bytes = chunk.as_bytes();
        let mut start = 0;
        for i in 1..bytes.len() {
            let prev = bytes[i - 1];
            if (prev.is_ascii_lowercase() || prev.is_ascii_digit()) && bytes[i].is_ascii_uppercase() {
                out.push(&chunk[start..i]);
                start = i;
            }
        }
        out.push(&chunk[start..]);
    }

    out
}

fn to_studly(input: &str) -> String {
    segments(input).into_iter().map(ucfirst).collect()
}

fn to_snake(studly: &str) -> String {
    segments(studly)
        .into_iter()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

// Naive on purpose: `category` -> `categorys`.
fn pluralize(word: &str) -> String {
    format!("{word}s")
}

fn ucfirst(segment: &str) -> String {
    let mut chars = segment.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_ascii_uppercase().to_string() + chars.as_str()
    })
}

fn lcfirst(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_ascii_lowercase().to_string() + chars.as_str()
    })
}
