use std::collections::BTreeMap;

use glam::Vec3;

use crate::traits::ShadingProgram;

#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    Vector3(Vec3),
    Color3(Vec3),
    Int(i32),
    Array3(Vec<f32>),
    Color3Array(Vec<Vec3>),
}

/// Shading program stand-in that records every uniform written to it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformStore {
    pub key: String,
    values: BTreeMap<String, UniformValue>,
    writes: u64,
}

impl UniformStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.values.get(name)
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, &UniformValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Total setter calls received, including overwrites
    pub fn writes(&self) -> u64 {
        self.writes
    }

    fn set(&mut self, name: &str, value: UniformValue) {
        self.values.insert(name.to_string(), value);
        self.writes += 1;
    }
}

impl ShadingProgram for UniformStore {
    fn set_vector3(&mut self, name: &str, value: Vec3) {
        self.set(name, UniformValue::Vector3(value));
    }

    fn set_color3(&mut self, name: &str, value: Vec3) {
        self.set(name, UniformValue::Color3(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.set(name, UniformValue::Int(value));
    }

    fn set_array3(&mut self, name: &str, values: &[f32]) {
        self.set(name, UniformValue::Array3(values.to_vec()));
    }

    fn set_color3_array(&mut self, name: &str, values: &[Vec3]) {
        self.set(name, UniformValue::Color3Array(values.to_vec()));
    }
}
