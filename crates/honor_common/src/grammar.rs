//! Singular/plural detection for verb agreement in responses.

use inflector::string::singularize::to_singular;

/// Whether a phrase should take plural verb forms.
///
/// A phrase counts as plural when the inflection library can singularize it,
/// i.e. it does not already parse as a singular noun. Multi-word phrases are
/// singularized at their tail ("bloodwine rituals" -> "bloodwine ritual").
pub fn is_plural(text: &str) -> bool {
    to_singular(text) != text
}
