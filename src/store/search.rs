//! Substring matching over server records.
//!
//! Pure containment, case-folded, across alias, hostname, and notes. No
//! tokenization, no fuzzy distance.

use crate::store::Server;

/// True if `query` (case-folded) is a substring of the record's case-folded
/// alias, hostname, or notes. The empty query matches everything.
pub fn matches(server: &Server, query: &str) -> bool {
    let query = query.to_lowercase();
    server.alias.to_lowercase().contains(&query)
        || server.hostname.to_lowercase().contains(&query)
        || server.notes.to_lowercase().contains(&query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(alias: &str, hostname: &str, notes: &str) -> Server {
        let mut s = Server::new(alias, hostname);
        s.notes = notes.to_string();
        s
    }

    #[test]
    fn matches_each_field() {
        let s = server("web1", "10.0.0.5:2222", "primary load balancer");
        assert!(matches(&s, "web"));
        assert!(matches(&s, "0.0.5"));
        assert!(matches(&s, "balancer"));
        assert!(!matches(&s, "db"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let s = server("Web1", "EDGE.example.com", "Primary");
        assert!(matches(&s, "wEb"));
        assert!(matches(&s, "edge.EXAMPLE"));
        assert!(matches(&s, "primary"));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches(&server("a", "h", ""), ""));
    }

    #[test]
    fn no_tokenization_across_fields() {
        // A query spanning two fields must not match.
        let s = server("web", "host", "");
        assert!(!matches(&s, "webhost"));
    }
}
