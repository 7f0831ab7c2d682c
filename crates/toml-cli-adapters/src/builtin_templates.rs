//! Templates that ship inside the binary.
//!
//! The formula template is embedded at compile time so the `toml` binary
//! never depends on files next to it. A user template can still replace it
//! through [`crate::TemplateLoader`].
//!
//! Placeholders available to a formula template:
//!
//! | Placeholder       | Value                                          |
//! |-------------------|------------------------------------------------|
//! | `{{NAME}}`        | class name                                     |
//! | `{{DESCRIPTION}}` | `desc` line                                    |
//! | `{{HOMEPAGE}}`    | resolved homepage                              |
//! | `{{URL}}`         | resolved download URL                          |
//! | `{{SHA256}}`      | archive checksum                               |
//! | `{{VERSION}}`     | release version, without the `v`               |
//! | `{{BIN}}`         | binary name                                    |
//! | `{{SITE}}`, `{{REPO}}`, `{{ARCHIVE}}` | raw inputs for custom layouts |

/// The built-in Homebrew formula template.
pub const FORMULA: &str = include_str!("../templates/formula.rb");
