/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Wire names for dotted control keys. Submitting `a.b` as a field name would
 * collide with nested-array syntax on some stacks, so dots travel as a
 * separator that keys never contain.
 */

/// Prefix of every value-bearing field name.
pub const NAME_MARKER: &str = "n_";

/// Prefix of every input element id.
pub const ID_MARKER: &str = "i_";

/// Stands in for `.` on the wire.
pub const PATH_SEPARATOR: &str = "_-_";

/// Replace path dots with the wire separator.
pub fn mangle_key(key: &str) -> String {
    key.replace('.', PATH_SEPARATOR)
}

/// Field name submitted for `key`: `a.b` becomes `n_a_-_b`.
pub fn encode_name(key: &str) -> String {
    format!("{NAME_MARKER}{}", mangle_key(key))
}

/// Inverse of [`encode_name`]. Returns `None` for names without the marker.
pub fn decode_name(name: &str) -> Option<String> {
    name.strip_prefix(NAME_MARKER)
        .map(|mangled| mangled.replace(PATH_SEPARATOR, "."))
}

/// Element id of the input for `key`.
pub fn dom_id(key: &str) -> String {
    format!("{ID_MARKER}{}", mangle_key(key))
}

/// Element id with a custom prefix, e.g. `fileList_` for upload widgets.
pub fn prefixed_id(prefix: &str, key: &str) -> String {
    format!("{prefix}{}", mangle_key(key))
}

/// A JavaScript identifier derived from `key`.
pub fn js_ident(prefix: &str, key: &str) -> String {
    let body: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{prefix}{body}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_dotted_key() {
        assert_eq!(encode_name("a.b"), "n_a_-_b");
        assert_eq!(encode_name("profile.address.city"), "n_profile_-_address_-_city");
        assert_eq!(encode_name("name"), "n_name");
    }

    #[test]
    fn test_decode_round_trip() {
        for key in ["a.b", "name", "a.b.c", "with_underscore.x", ""] {
            assert_eq!(decode_name(&encode_name(key)).as_deref(), Some(key));
        }
    }

    #[test]
    fn test_decode_without_marker() {
        assert_eq!(decode_name("referer"), None);
    }

    #[test]
    fn test_ids() {
        assert_eq!(dom_id("a.b"), "i_a_-_b");
        assert_eq!(prefixed_id("fileList_", "a.b"), "fileList_a_-_b");
        assert_eq!(js_ident("editor_", "a.b-c"), "editor_a_b_c");
    }
}
