use crudgen_core::{ClassName, Driver};

use serde::Deserialize;

const VERTX_ORM: &str = "com.github.longdt.vertxorm.repository";

/// Configuration for repository generation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Runtime classes referenced by generated code
    pub runtime: Runtime,

    /// `@Generated` marker added to every class, if any
    pub generated: Option<GeneratedAnnotation>,

    /// One level of indentation in the emitted source
    pub indent: String,

    /// Leave `java.lang` types out of the import list
    pub skip_java_lang_imports: bool,
}

/// Runtime classes the generated repositories are wired against
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Runtime {
    /// Row mapper providing the static `builder` entry point
    pub row_mapper: ClassName,

    /// Concrete mapper type the built mapper is cast to
    pub row_mapper_impl: ClassName,

    /// Connection pool accepted by the generated constructor
    pub pool: ClassName,

    /// Default base class per dialect
    pub base_classes: DialectTable,
}

/// Default base class for each [`Driver`].
///
/// Adding a dialect means adding a field here and an arm to [`DialectTable::get`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DialectTable {
    pub postgresql: ClassName,
    pub mysql: ClassName,
}

/// `@Generated(value = .., comments = ..)`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratedAnnotation {
    /// Annotation type
    pub annotation: ClassName,

    /// Generator identity written to `value`
    pub value: String,

    /// Text written to `comments`
    pub comments: Option<String>,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the runtime classes
    pub fn runtime(mut self, runtime: Runtime) -> Self {
        self.runtime = runtime;
        self
    }

    /// Set or clear the `@Generated` annotation
    pub fn generated(mut self, generated: Option<GeneratedAnnotation>) -> Self {
        self.generated = generated;
        self
    }

    /// Set the indentation unit
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Whether `java.lang` types are imported explicitly
    pub fn skip_java_lang_imports(mut self, skip: bool) -> Self {
        self.skip_java_lang_imports = skip;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runtime: Runtime::default(),
            generated: Some(GeneratedAnnotation::default()),
            indent: "  ".to_string(),
            skip_java_lang_imports: true,
        }
    }
}

impl Runtime {
    /// Create a new Runtime pointing at the vertx-orm classes
    pub fn new() -> Self {
        Self::default()
    }

    /// Default base class for `driver`
    pub fn base_class(&self, driver: Driver) -> &ClassName {
        self.base_classes.get(driver)
    }

    /// Set the row mapper class
    pub fn row_mapper(mut self, class: ClassName) -> Self {
        self.row_mapper = class;
        self
    }

    /// Set the concrete row mapper class
    pub fn row_mapper_impl(mut self, class: ClassName) -> Self {
        self.row_mapper_impl = class;
        self
    }

    /// Set the connection pool class
    pub fn pool(mut self, class: ClassName) -> Self {
        self.pool = class;
        self
    }

    /// Override the default base class of one dialect
    pub fn base_class_for(mut self, driver: Driver, class: ClassName) -> Self {
        *self.base_classes.get_mut(driver) = class;
        self
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self {
            row_mapper: ClassName::new(VERTX_ORM, "RowMapper"),
            row_mapper_impl: ClassName::new(format!("{VERTX_ORM}.base"), "RowMapperImpl"),
            pool: ClassName::new("io.vertx.sqlclient", "Pool"),
            base_classes: DialectTable::default(),
        }
    }
}

impl DialectTable {
    pub fn get(&self, driver: Driver) -> &ClassName {
        match driver {
            Driver::Postgresql => &self.postgresql,
            Driver::Mysql => &self.mysql,
        }
    }

    fn get_mut(&mut self, driver: Driver) -> &mut ClassName {
        match driver {
            Driver::Postgresql => &mut self.postgresql,
            Driver::Mysql => &mut self.mysql,
        }
    }
}

impl Default for DialectTable {
    fn default() -> Self {
        let base = |dialect: &str| {
            ClassName::new(format!("{VERTX_ORM}.{dialect}"), "AbstractCrudRepository")
        };

        Self {
            postgresql: base("postgresql"),
            mysql: base("mysql"),
        }
    }
}

impl Default for GeneratedAnnotation {
    fn default() -> Self {
        Self {
            annotation: ClassName::new("javax.annotation.processing", "Generated"),
            value: "crudgen".to_string(),
            comments: Some("Do not edit this file".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: Config = serde_json::from_str(
            r#"{
                "indent": "    ",
                "runtime": { "base_classes": { "mysql": "com.acme.MysqlBase" } }
            }"#,
        )
        .unwrap();

        assert_eq!(config.indent, "    ");
        assert_eq!(config.generated, Some(GeneratedAnnotation::default()));
        assert_eq!(
            config.runtime.base_class(Driver::Mysql).canonical_name(),
            "com.acme.MysqlBase"
        );
        assert_eq!(
            config.runtime.base_class(Driver::Postgresql).canonical_name(),
            "com.github.longdt.vertxorm.repository.postgresql.AbstractCrudRepository"
        );
    }

    #[test]
    fn generated_can_be_disabled() {
        let config: Config = serde_json::from_str(r#"{ "generated": null }"#).unwrap();
        assert_eq!(config.generated, None);
    }

    #[test]
    fn base_class_override() {
        let runtime =
            Runtime::new().base_class_for(Driver::Postgresql, ClassName::new("a", "PgBase"));

        assert_eq!(runtime.base_class(Driver::Postgresql).simple_name(), "PgBase");
        assert_eq!(
            runtime.base_class(Driver::Mysql),
            &DialectTable::default().mysql
        );
    }
}
