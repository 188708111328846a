// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Compose module: field normalisation, template acquisition and synthesis,
// and the document compositor.

pub mod cache;
pub mod compositor;
pub mod normalize;
pub mod template;

pub use cache::{DirectoryTemplates, NoTemplates, TemplateCache, TemplateSource};
pub use compositor::{DocumentCompositor, GeneratedDocument, field_origin};
pub use normalize::normalize_field;
pub use template::synthesize_template;
