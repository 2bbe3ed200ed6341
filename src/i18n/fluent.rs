// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed message catalog.

use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use unic_langid::{langid, LanguageIdentifier};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// The only shipped locale.
pub const DEFAULT_LOCALE: LanguageIdentifier = langid!("en-US");

pub struct I18n {
    bundle: FluentBundle<FluentResource>,
    locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n").field("locale", &self.locale).finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

impl I18n {
    /// Loads the embedded catalog for [`DEFAULT_LOCALE`].
    ///
    /// Parse errors are logged and the valid part of the catalog is kept.
    pub fn new() -> Self {
        let locale = DEFAULT_LOCALE;
        let mut bundle = FluentBundle::new(vec![locale.clone()]);
        // Keep interpolated names free of bidi isolation marks.
        bundle.set_use_isolating(false);

        let filename = format!("{locale}.ftl");
        match Asset::get(&filename) {
            Some(content) => {
                let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
                let resource = match FluentResource::try_new(source) {
                    Ok(resource) => resource,
                    Err((resource, errors)) => {
                        tracing::warn!(file = %filename, ?errors, "Catalog has parse errors");
                        resource
                    }
                };
                if let Err(errors) = bundle.add_resource(resource) {
                    tracing::warn!(file = %filename, ?errors, "Catalog has duplicate entries");
                }
            }
            None => tracing::warn!(file = %filename, "Message catalog not embedded"),
        }

        Self { bundle, locale }
    }

    #[must_use]
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Resolves `key`, or returns `"MISSING: <key>"`.
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Resolves `key` with named arguments, e.g. `&[("name", "Ana")]`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(msg) = self.bundle.get_message(key) {
            if let Some(pattern) = msg.value() {
                let mut errors = vec![];
                let value = self.bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
                tracing::debug!(key, ?errors, "Failed to format message");
            }
        }
        format!("MISSING: {}", key)
    }
}
