use std::collections::HashMap;

use crate::error::{Result, SceneError};
use crate::types::MaterialBinding;

/// Shading algorithm every scene starts with
pub const DEFAULT_SHADING_ALGORITHM: &str = "gouraud";

pub fn ground_key(algorithm: &str) -> String {
    format!("ground_{algorithm}")
}

pub fn illum_key(algorithm: &str) -> String {
    format!("illum_{algorithm}")
}

/// Shading programs of one scene, addressed by key or by resolved slot
#[derive(Debug)]
pub struct MaterialLibrary<P> {
    scene: usize,
    programs: Vec<P>,
    slots: HashMap<String, usize>,
}

impl<P> MaterialLibrary<P> {
    pub fn new(scene: usize, materials: HashMap<String, P>) -> Self {
        let mut entries: Vec<_> = materials.into_iter().collect();
        // stable slot order regardless of hash iteration
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut programs = Vec::with_capacity(entries.len());
        let mut slots = HashMap::with_capacity(entries.len());
        for (key, program) in entries {
            slots.insert(key, programs.len());
            programs.push(program);
        }

        Self {
            scene,
            programs,
            slots,
        }
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Resolve `key` into a binding, failing loudly on unknown keys
    pub fn bind(&self, key: &str) -> Result<MaterialBinding> {
        let slot = self
            .slots
            .get(key)
            .copied()
            .ok_or_else(|| SceneError::MissingMaterialKey {
                scene: self.scene,
                key: key.to_string(),
            })?;
        Ok(MaterialBinding {
            key: key.to_string(),
            slot,
        })
    }

    pub fn get(&self, key: &str) -> Option<&P> {
        self.slots.get(key).map(|&slot| &self.programs[slot])
    }

    pub fn program(&self, binding: &MaterialBinding) -> &P {
        &self.programs[binding.slot]
    }

    /// Mutable access to the programs at `slots`, in slot order
    pub fn programs_mut<'a>(&'a mut self, slots: &'a [usize]) -> impl Iterator<Item = &'a mut P> + 'a {
        self.programs
            .iter_mut()
            .enumerate()
            .filter(move |(slot, _)| slots.contains(slot))
            .map(|(_, program)| program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> MaterialLibrary<&'static str> {
        let materials = HashMap::from([
            (ground_key("gouraud"), "ground gouraud"),
            (illum_key("gouraud"), "illum gouraud"),
            (ground_key("phong"), "ground phong"),
        ]);
        MaterialLibrary::new(2, materials)
    }

    #[test]
    fn keys_follow_naming_convention() {
        assert_eq!(ground_key("phong"), "ground_phong");
        assert_eq!(illum_key("gouraud"), "illum_gouraud");
    }

    #[test]
    fn bind_resolves_program() {
        let library = library();
        let binding = library.bind("ground_phong").unwrap();
        assert_eq!(binding.key, "ground_phong");
        assert_eq!(*library.program(&binding), "ground phong");
    }

    #[test]
    fn bind_unknown_key_fails() {
        let library = library();
        assert_eq!(
            library.bind("illum_phong"),
            Err(SceneError::MissingMaterialKey {
                scene: 2,
                key: "illum_phong".to_string()
            })
        );
    }

    #[test]
    fn slots_are_sorted_by_key() {
        let library = library();
        assert_eq!(library.bind("ground_gouraud").unwrap().slot(), 0);
        assert_eq!(library.bind("ground_phong").unwrap().slot(), 1);
        assert_eq!(library.bind("illum_gouraud").unwrap().slot(), 2);
    }

    #[test]
    fn programs_mut_visits_requested_slots() {
        let mut library = library();
        let visited: Vec<_> = library.programs_mut(&[2, 0]).map(|p| *p).collect();
        assert_eq!(visited, vec!["ground gouraud", "illum gouraud"]);
    }
}
