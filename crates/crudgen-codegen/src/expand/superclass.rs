use super::Expand;

use crudgen_core::{Extending, TypeName};

impl Expand<'_> {
    pub(super) fn expand_superclass(&self) -> TypeName {
        match self.descriptor.extending() {
            // Already parameterized by the caller
            Extending::Explicit(ty) => ty.clone(),
            Extending::Default => {
                let driver = self.descriptor.repository().driver();
                let base = self.config.runtime.base_class(driver);

                TypeName::parameterized(base.clone(), self.key_entity_args())
            }
        }
    }
}
