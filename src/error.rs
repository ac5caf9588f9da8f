/// Errors raised while building or driving the scene catalog
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("degenerate topology: {shape} needs at least one segment per direction (got {segments:?})")]
    DegenerateTopology {
        shape: &'static str,
        segments: [u32; 2],
    },

    #[error("{shape} needs {vertices} vertices, more than u32 indices can address")]
    IndexOverflow { shape: &'static str, vertices: u64 },

    #[error("scene {scene}: no material registered under key `{key}`")]
    MissingMaterialKey { scene: usize, key: String },

    #[error("scene index {index} out of range (catalog holds {count} scenes)")]
    OutOfRangeScene { index: usize, count: usize },

    #[error("light index {index} out of range (scene {scene} holds {count} lights)")]
    OutOfRangeLightIndex {
        scene: usize,
        index: usize,
        count: usize,
    },

    #[error("scene {scene} is invalid: {reason}")]
    InvalidScene { scene: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, SceneError>;
