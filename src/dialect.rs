//! SQL dialect resolution from JDBC-style driver identifiers

use std::fmt;

/// Target SQL dialect, derived from the configured driver class name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    H2,
    MySql,
    PostgreSql,
    Unknown,
}

impl Dialect {
    /// Resolve a driver identifier to a dialect.
    ///
    /// Substring checks run in fixed priority order (`h2`, `mysql`,
    /// `postgresql`); the first match wins so resolution stays
    /// deterministic even for identifiers containing several markers.
    pub fn resolve(driver_identifier: &str) -> Dialect {
        if driver_identifier.contains("h2") {
            Dialect::H2
        } else if driver_identifier.contains("mysql") {
            Dialect::MySql
        } else if driver_identifier.contains("postgresql") {
            Dialect::PostgreSql
        } else {
            Dialect::Unknown
        }
    }

    /// Name of the dialect as it appears in prompts
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::H2 => "H2",
            Dialect::MySql => "MySQL",
            Dialect::PostgreSql => "PostgreSQL",
            Dialect::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_drivers() {
        assert_eq!(Dialect::resolve("org.h2.Driver"), Dialect::H2);
        assert_eq!(Dialect::resolve("com.mysql.cj.jdbc.Driver"), Dialect::MySql);
        assert_eq!(Dialect::resolve("org.postgresql.Driver"), Dialect::PostgreSql);
    }

    #[test]
    fn test_resolve_unknown_driver() {
        assert_eq!(Dialect::resolve("oracle.jdbc.OracleDriver"), Dialect::Unknown);
        assert_eq!(Dialect::resolve(""), Dialect::Unknown);
    }

    #[test]
    fn test_resolve_priority_order() {
        // h2 wins over mysql when both markers are present
        assert_eq!(Dialect::resolve("h2-mysql-hybrid"), Dialect::H2);
        assert_eq!(Dialect::resolve("mysql-postgresql-bridge"), Dialect::MySql);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let first = Dialect::resolve("org.postgresql.Driver");
        let second = Dialect::resolve("org.postgresql.Driver");
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Dialect::H2.to_string(), "H2");
        assert_eq!(Dialect::MySql.to_string(), "MySQL");
        assert_eq!(Dialect::PostgreSql.to_string(), "PostgreSQL");
        assert_eq!(Dialect::Unknown.to_string(), "Unknown");
    }
}
