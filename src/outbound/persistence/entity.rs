//! Declarative table descriptors driving schema synchronisation.
//!
//! The store derives its DDL from these descriptors when it connects,
//! rather than from versioned migrations. `schema.rs` mirrors the same
//! columns for Diesel's compile-time query validation; the two must be
//! kept in step by hand.

/// Column affinity rendered into the DDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColumnType {
    Text,
    Integer,
    Boolean,
    /// RFC 3339 text; lexicographic order matches chronological order.
    Timestamp,
}

impl ColumnType {
    fn sql(self, max_length: Option<u32>) -> String {
        match (self, max_length) {
            (Self::Text, Some(len)) => format!("VARCHAR({len})"),
            (Self::Text, None) => "TEXT".to_owned(),
            (Self::Integer, _) => "INTEGER".to_owned(),
            (Self::Boolean, _) => "BOOLEAN".to_owned(),
            (Self::Timestamp, _) => "TEXT".to_owned(),
        }
    }
}

/// Single column declaration: name, affinity, and constraints.
#[derive(Debug, Clone)]
pub(crate) struct Column {
    name: &'static str,
    ty: ColumnType,
    primary_key: bool,
    nullable: bool,
    unique: bool,
    max_length: Option<u32>,
    default: Option<&'static str>,
}

impl Column {
    pub(crate) const fn new(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            primary_key: false,
            nullable: false,
            unique: false,
            max_length: None,
            default: None,
        }
    }

    pub(crate) const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub(crate) const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub(crate) const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub(crate) const fn max_length(mut self, len: u32) -> Self {
        self.max_length = Some(len);
        self
    }

    pub(crate) const fn default_value(mut self, expr: &'static str) -> Self {
        self.default = Some(expr);
        self
    }

    fn render(&self) -> String {
        let mut sql = format!("{} {}", self.name, self.ty.sql(self.max_length));
        if self.primary_key {
            sql.push_str(" PRIMARY KEY");
        }
        if !self.nullable {
            sql.push_str(" NOT NULL");
        }
        if self.unique {
            sql.push_str(" UNIQUE");
        }
        if let Some(default) = self.default {
            sql.push_str(" DEFAULT ");
            sql.push_str(default);
        }
        sql
    }
}

/// Table declaration consumed by the schema-sync step.
#[derive(Debug, Clone)]
pub(crate) struct TableDef {
    pub(crate) name: &'static str,
    columns: &'static [Column],
}

impl TableDef {
    /// Render the idempotent DDL for this table.
    pub(crate) fn create_sql(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(Column::render)
            .collect::<Vec<_>>()
            .join(",\n    ");
        format!("CREATE TABLE IF NOT EXISTS {} (\n    {columns}\n)", self.name)
    }
}

/// Users table descriptor matching `schema::users`.
pub(crate) const USERS_TABLE: TableDef = TableDef {
    name: "users",
    columns: &[
        Column::new("id", ColumnType::Text).primary_key(),
        Column::new("name", ColumnType::Text).max_length(100),
        Column::new("email", ColumnType::Text).max_length(100).unique(),
        Column::new("age", ColumnType::Integer).nullable(),
        Column::new("is_active", ColumnType::Boolean).default_value("1"),
        Column::new("created_at", ColumnType::Timestamp),
        Column::new("updated_at", ColumnType::Timestamp),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_ddl_renders_all_columns_and_constraints() {
        let expected = "CREATE TABLE IF NOT EXISTS users (\n    \
            id TEXT PRIMARY KEY NOT NULL,\n    \
            name VARCHAR(100) NOT NULL,\n    \
            email VARCHAR(100) NOT NULL UNIQUE,\n    \
            age INTEGER,\n    \
            is_active BOOLEAN NOT NULL DEFAULT 1,\n    \
            created_at TEXT NOT NULL,\n    \
            updated_at TEXT NOT NULL\n)";
        assert_eq!(USERS_TABLE.create_sql(), expected);
    }

    #[test]
    fn nullable_column_omits_not_null() {
        let column = Column::new("age", ColumnType::Integer).nullable();
        assert_eq!(column.render(), "age INTEGER");
    }

    #[test]
    fn text_length_renders_as_varchar() {
        let column = Column::new("name", ColumnType::Text).max_length(100);
        assert_eq!(column.render(), "name VARCHAR(100) NOT NULL");
    }
}
