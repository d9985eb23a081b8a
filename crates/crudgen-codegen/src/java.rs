//! Structural model of the generated Java source.

mod annotation;
pub use annotation::AnnotationSpec;

mod code;
pub use code::{Call, Expr, Stmt, Target};

mod generated_class;
pub use generated_class::GeneratedClass;

mod method;
pub use method::{ConstructorSpec, ParameterSpec};

mod modifier;
pub use modifier::Modifier;

mod type_spec;
pub use type_spec::TypeSpec;
