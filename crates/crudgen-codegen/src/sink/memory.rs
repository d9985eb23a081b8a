use super::UnitSink;
use crate::GeneratedClass;

use crudgen_core::ClassName;
use std::collections::BTreeMap;
use std::io;

/// Keeps rendered units in memory, keyed by canonical class name.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    units: BTreeMap<String, MemoryUnit>,
}

#[derive(Debug, Clone)]
struct MemoryUnit {
    source: String,
    originating_elements: Vec<ClassName>,
}

impl MemorySink {
    pub fn new() -> MemorySink {
        MemorySink::default()
    }

    /// Rendered source of a unit.
    pub fn get(&self, class: &str) -> Option<&str> {
        self.units.get(class).map(|unit| unit.source.as_str())
    }

    /// Source elements recorded for a unit.
    pub fn originating_elements(&self, class: &str) -> Option<&[ClassName]> {
        self.units
            .get(class)
            .map(|unit| unit.originating_elements.as_slice())
    }

    /// Canonical names of every stored unit, sorted.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl UnitSink for MemorySink {
    fn write_unit(&mut self, unit: &GeneratedClass) -> io::Result<()> {
        self.units.insert(
            unit.name().canonical_name(),
            MemoryUnit {
                source: unit.to_source(),
                originating_elements: unit.originating_elements().to_vec(),
            },
        );

        Ok(())
    }
}
