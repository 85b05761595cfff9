//! Run configuration: file exclusion and token filters.

use globset::{Glob, GlobSet, GlobSetBuilder};

/// A named token filter pattern. A definition whose dotted path matches any
/// configured pattern is considered coverage-required.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenPattern {
    pub name: String,
}

impl TokenPattern {
    pub fn new(name: impl Into<String>) -> TokenPattern {
        TokenPattern { name: name.into() }
    }
}

/// Configuration consumed by the symbol table builder and coverage pass.
#[derive(Default)]
pub struct Config {
    exclude: Option<GlobSet>,
    pub tokens: Vec<TokenPattern>,
}

impl Config {
    pub fn new() -> Config {
        Config::default()
    }

    /// Compile glob patterns (e.g. `node_modules/**`, `*.d.ts`) into the
    /// exclusion predicate.
    pub fn with_exclude_globs(mut self, patterns: &[&str]) -> Result<Config, globset::Error> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(Glob::new(pattern)?);
        }
        self.exclude = Some(builder.build()?);
        Ok(self)
    }

    pub fn with_tokens(mut self, tokens: impl IntoIterator<Item = TokenPattern>) -> Config {
        self.tokens.extend(tokens);
        self
    }

    /// True when a file should be skipped entirely.
    pub fn exclude(&self, file_name: &str) -> bool {
        match &self.exclude {
            Some(set) => set.is_match(file_name),
            None => false,
        }
    }
}
