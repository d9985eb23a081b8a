mod class_name;
pub use class_name::ClassName;

mod ident;
pub use ident::is_identifier;

mod parse;

mod primitive;
pub use primitive::Primitive;

mod type_name;
pub use type_name::{TypeName, WildcardBound};
