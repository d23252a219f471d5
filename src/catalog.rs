//! Resolves catalog entries against the build's flag table into sections.

use genversion_config::{Catalog, CatalogEntry, FlagTable, FlagValue};

use crate::{generator::Section, render::Token};

/// Turns every catalog section into a [`Section`] of tokens, in order.
pub fn resolve(catalog: &Catalog, flags: &FlagTable) -> Vec<Section> {
    catalog
        .sections
        .iter()
        .map(|section| {
            let mut tokens = Vec::with_capacity(section.entries.len());
            for entry in &section.entries {
                resolve_entry(entry, flags, &mut tokens);
            }
            Section::new(section.label.clone(), tokens)
        })
        .collect()
}

fn resolve_entry(entry: &CatalogEntry, flags: &FlagTable, tokens: &mut Vec<Token>) {
    match entry {
        CatalogEntry::Var { key, flag, prefix } => {
            tokens.push(var_token(key, flag.as_deref(), prefix.as_deref(), flags));
        }
        CatalogEntry::OptionalVar { key, flag } => {
            if let Some(value) = flags.lookup(flag.as_deref().unwrap_or(key)) {
                tokens.push(Token::defined(key, value.as_text()));
            }
        }
        CatalogEntry::Number { key, flag } => {
            if let Some(value) = flags.lookup(flag.as_deref().unwrap_or(key)) {
                tokens.push(number_token(key, value));
            }
        }
        CatalogEntry::Flag { literal, flag } => {
            if flags.is_set(flag.as_deref().unwrap_or(literal)) {
                tokens.push(Token::literal(literal));
            }
        }
        CatalogEntry::Unless { literal, flag } => {
            if !flags.is_set(flag) {
                tokens.push(Token::literal(literal));
            }
        }
        CatalogEntry::Fallback {
            literal,
            unless_any,
        } => {
            if !unless_any.iter().any(|name| flags.is_set(name)) {
                tokens.push(Token::literal(literal));
            }
        }
        CatalogEntry::Gated { gate, vars } => {
            let open = flags.is_set(gate);
            for spec in vars {
                if open {
                    tokens.push(var_token(&spec.key, Some(spec.flag_name()), None, flags));
                } else {
                    tokens.push(Token::undefined(&spec.key));
                }
            }
        }
    }
}

/// A declared key always yields a token: its value, or `UNDEF`.
fn var_token(key: &str, flag: Option<&str>, prefix: Option<&str>, flags: &FlagTable) -> Token {
    match flags.lookup(flag.unwrap_or(key)) {
        Some(value) => {
            let text = value.as_text();
            match prefix {
                Some(prefix) => Token::defined(key, format!("{prefix}{text}")),
                None => Token::defined(key, text),
            }
        }
        None => Token::undefined(key),
    }
}

fn number_token(key: &str, value: &FlagValue) -> Token {
    match value {
        FlagValue::Number(number) => Token::numeric(key, *number),
        FlagValue::Switch(_) => Token::numeric(key, 1),
        FlagValue::Text(text) => match text.trim().parse::<i64>() {
            Ok(number) => Token::numeric(key, number),
            Err(_) => Token::defined(key, text.as_str()),
        },
    }
}
