use super::Expand;
use crate::java::{ConstructorSpec, Expr, Modifier, ParameterSpec, Stmt};

use crudgen_core::{FieldDescriptor, TypeName};

/// Value of the `generated` flag on the primary key registration.
///
/// Keys are always treated as generated by the database. A per-entity
/// setting would replace this constant.
const PK_GENERATED: bool = true;

const POOL: &str = "pool";

const MAPPER_BUILDER: &str = "mapperBuilder";

impl Expand<'_> {
    pub(super) fn expand_constructor(&self) -> ConstructorSpec {
        let pool = &self.config.runtime.pool;

        ConstructorSpec {
            modifiers: vec![Modifier::Public],
            params: vec![ParameterSpec::new(pool, POOL)],
            body: vec![
                Stmt::Local {
                    name: MAPPER_BUILDER.to_string(),
                    init: self.expand_mapper_builder(),
                },
                Stmt::Expr(self.expand_init()),
            ],
        }
    }

    /// `RowMapper.<K, E>builder(table, E::new).pk(..).addField(..)...`
    ///
    /// The primary key is always registered first, then the remaining fields
    /// in declaration order.
    fn expand_mapper_builder(&self) -> Expr {
        let entity = self.entity();
        let runtime = &self.config.runtime;

        let mut builder = Expr::static_call(
            runtime.row_mapper.clone(),
            self.key_entity_args(),
            "builder",
            vec![
                Expr::str(entity.table_name()),
                Expr::method_ref(self.entity_type(), "new"),
            ],
        );

        let mut pk_args = self.expand_field_args(entity.pk_field());
        pk_args.push(Expr::Bool(PK_GENERATED));
        builder = builder.chain("pk", pk_args);

        for field in entity.fields() {
            builder = builder.chain("addField", self.expand_field_args(field));
        }

        builder
    }

    /// `"name", E::getter, E::setter`
    fn expand_field_args(&self, field: &FieldDescriptor) -> Vec<Expr> {
        let accessors = field.accessors();

        vec![
            Expr::str(field.name()),
            Expr::method_ref(self.entity_type(), accessors.getter()),
            Expr::method_ref(self.entity_type(), accessors.setter()),
        ]
    }

    /// `init(pool, (RowMapperImpl<K, E>) mapperBuilder.build())`
    fn expand_init(&self) -> Expr {
        let mapper_ty = TypeName::parameterized(
            self.config.runtime.row_mapper_impl.clone(),
            self.key_entity_args(),
        );

        let mapper = Expr::name(MAPPER_BUILDER).chain("build", vec![]);

        Expr::call("init", vec![Expr::name(POOL), Expr::cast(mapper_ty, mapper)])
    }
}
