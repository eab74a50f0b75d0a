//! Tag shorthand expansion
//!
//! `div#main.card.active` becomes tag `div` with `id="main"` and
//! `class="card active"`. Classes from the shorthand are appended after
//! any explicit `class`/`classes` value.

use crate::attributes::Attributes;
use crate::value::AttrValue;

/// Reserved alias folded into `class`
const CLASS_ALIAS: &str = "classes";

/// Join class fragments with single spaces, dropping blanks
pub(crate) fn join_classes<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        for class in part.as_ref().split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(class);
        }
    }
    out
}

/// Fold `classes` into `class`, explicit `class` first.
///
/// `class` keeps its position; when only the alias was given the merged
/// value takes the alias' place at the end of the map.
pub fn unify_class_aliases(attrs: &mut Attributes) {
    let alias = attrs.remove(CLASS_ALIAS);
    if alias.is_none() && !attrs.contains_key("class") {
        return;
    }
    let explicit = attrs.get("class").map(AttrValue::class_text).unwrap_or_default();
    let alias = alias.as_ref().map(AttrValue::class_text).unwrap_or_default();
    attrs.insert("class", join_classes([explicit, alias]));
}

/// Expand `tag` shorthand into `attrs`, returning the base tag name.
///
/// The first `#id` segment wins unless `attrs` already carries a truthy
/// `id`. An empty class is removed rather than left as `class=""`.
pub fn expand(tag: &str, attrs: &mut Attributes, default_tag: &str) -> String {
    unify_class_aliases(attrs);

    let marked = tag.trim().replace('#', ".#");
    let mut segments = marked.split('.');
    let base = segments.next().unwrap_or_default();

    let mut classes: Vec<String> = attrs
        .get("class")
        .map(AttrValue::class_text)
        .into_iter()
        .collect();

    for segment in segments {
        if let Some(id) = segment.strip_prefix('#') {
            let has_id = attrs.get("id").is_some_and(|v| !v.is_falsy());
            if !id.is_empty() && !has_id {
                attrs.insert("id", id);
            }
        } else if !segment.is_empty() {
            classes.push(segment.to_string());
        }
    }

    let class = join_classes(&classes);
    if class.is_empty() {
        attrs.remove("class");
    } else {
        attrs.insert("class", class);
    }

    if base.is_empty() {
        default_tag.to_string()
    } else {
        base.to_string()
    }
}
