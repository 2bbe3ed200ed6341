// SPDX-License-Identifier: MPL-2.0
//! User-facing strings.
//!
//! All labels, buttons and notices are looked up in an embedded Fluent
//! catalog (`assets/i18n/en-US.ftl`). Only one locale ships. Validation
//! messages are owned by the domain and are not part of the catalog.

pub mod fluent;

pub use fluent::I18n;
