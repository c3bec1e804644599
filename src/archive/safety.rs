//! Archive entry name checks
//!
//! One unsafe name rejects the whole archive; nothing is extracted.

/// Substrings that mark an entry name as a traversal risk
const UNSAFE_MARKERS: [&str; 3] = ["..", "./", "\\"];

/// Whether an entry name contains a traversal marker or is absolute
pub fn is_unsafe_entry_name(name: &str) -> bool {
    UNSAFE_MARKERS.iter().any(|marker| name.contains(marker)) || name.starts_with('/')
}

/// First unsafe name among `names`, if any
pub fn find_unsafe_entry<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    names.into_iter().find(|name| is_unsafe_entry_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_names() {
        for name in ["Blog/", "Blog/module.json", "Blog/src/Http/Controller.php", "Loose.php"] {
            assert!(!is_unsafe_entry_name(name), "{name} should be safe");
        }
    }

    #[test]
    fn test_parent_directory_marker() {
        assert!(is_unsafe_entry_name("../evil"));
        assert!(is_unsafe_entry_name("Blog/../../evil"));
    }

    #[test]
    fn test_backslash_marker() {
        assert!(is_unsafe_entry_name("..\\evil"));
        assert!(is_unsafe_entry_name("Blog\\module.json"));
    }

    #[test]
    fn test_current_directory_marker() {
        assert!(is_unsafe_entry_name("./Blog/module.json"));
        assert!(is_unsafe_entry_name("Blog/./module.json"));
    }

    #[test]
    fn test_absolute_name() {
        assert!(is_unsafe_entry_name("/etc/passwd"));
    }

    #[test]
    fn test_find_unsafe_entry() {
        let names = ["Blog/module.json", "../evil", "Shop/"];
        assert_eq!(find_unsafe_entry(names), Some("../evil"));
        assert_eq!(find_unsafe_entry(["Blog/"]), None);
    }
}
