use crate::GeneratedClass;

use crudgen_core::ClassName;
use std::collections::{BTreeMap, BTreeSet};

/// Decides which classes are written by simple name.
///
/// A top-level class may use its simple name when no other referenced class
/// shares that name. The generated class always claims its own name, so a
/// referenced class called the same is written fully qualified.
#[derive(Debug)]
pub(super) struct Imports {
    /// Top-level classes that may be referenced by simple name
    usable: BTreeSet<ClassName>,
}

impl Imports {
    pub(super) fn collect(class: &GeneratedClass) -> Imports {
        let mut referenced = BTreeSet::new();
        referenced.insert(class.name().top_level());

        class.type_spec().visit_class_names(&mut |name| {
            referenced.insert(name.top_level());
        });

        let mut by_simple_name: BTreeMap<&str, Vec<&ClassName>> = BTreeMap::new();
        for name in &referenced {
            by_simple_name
                .entry(name.simple_name())
                .or_default()
                .push(name);
        }

        let usable = by_simple_name
            .into_values()
            .filter(|names| names.len() == 1)
            .map(|names| names[0].clone())
            .collect();

        Imports { usable }
    }

    pub(super) fn is_usable(&self, name: &ClassName) -> bool {
        if name.is_top_level() {
            self.usable.contains(name)
        } else {
            self.usable.contains(&name.top_level())
        }
    }

    /// Classes needing an `import` line in a unit declared in `package`,
    /// sorted by canonical name.
    pub(super) fn import_list(&self, package: &str, skip_java_lang: bool) -> Vec<&ClassName> {
        let mut list: Vec<_> = self
            .usable
            .iter()
            .filter(|name| {
                !name.package().is_empty()
                    && name.package() != package
                    && !(skip_java_lang && name.is_java_lang())
            })
            .collect();

        list.sort_by_key(|name| name.canonical_name());
        list
    }
}
