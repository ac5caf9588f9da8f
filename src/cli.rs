// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::materials::DEFAULT_SHADING_ALGORITHM;
use crate::traits::{Key, KeyEvent};

#[derive(Parser, Debug, Clone)]
#[command(name = "shading-lab")]
#[command(about = "Headless driver for the shading demonstration scenes", long_about = None)]
pub struct Cli {
    /// JSON file holding an array of scene configurations (built-in scenes when omitted)
    #[arg(long)]
    pub scene_file: Option<PathBuf>,

    /// Scene to display and steer
    #[arg(long, default_value_t = 0)]
    pub scene: usize,

    /// Light of the active scene that follows the keyboard
    #[arg(long, default_value_t = 0)]
    pub light: usize,

    /// Shading algorithm applied to every scene
    #[arg(long, default_value = DEFAULT_SHADING_ALGORITHM)]
    pub shading: String,

    /// Ground height scale applied to every scene
    #[arg(long)]
    pub height_scale: Option<f32>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 120)]
    pub frames: u64,

    /// Frame rate of the simulated render loop
    #[arg(long, default_value_t = 60.0, value_parser = parse_positive)]
    pub fps: f32,

    /// Viewport width / height used when packing the camera uniform
    #[arg(long, default_value_t = 16.0 / 9.0, value_parser = parse_positive)]
    pub aspect: f32,

    /// Scripted input as `frame:key+` (down) or `frame:key-` (up), comma separated
    #[arg(long, value_parser = parse_key_script, default_value = "")]
    pub keys: KeyScript,

    /// Disable UI elements and console output
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

/// Key event delivered before the given frame ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedKey {
    pub frame: u64,
    pub event: KeyEvent,
}

/// Key events ordered by frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyScript(Vec<ScriptedKey>);

impl KeyScript {
    pub fn events(&self) -> &[ScriptedKey] {
        &self.0
    }
}

/// Finite values strictly above zero
pub fn parse_positive(input: &str) -> Result<f32, String> {
    let value = input
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("`{input}` is not a number: {e}"))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("expected a finite value above 0, got `{input}`"));
    }
    Ok(value)
}

pub fn parse_key_script(input: &str) -> Result<KeyScript, String> {
    let mut events = input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_entry)
        .collect::<Result<Vec<_>, _>>()?;
    events.sort_by_key(|e| e.frame);
    Ok(KeyScript(events))
}

fn parse_entry(entry: &str) -> Result<ScriptedKey, String> {
    let (frame, action) = entry
        .split_once(':')
        .ok_or_else(|| format!("expected `frame:key+` or `frame:key-`, got `{entry}`"))?;
    let frame = frame
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("bad frame number in `{entry}`: {e}"))?;

    let mut chars = action.trim().chars();
    let (key, direction) = match (chars.next(), chars.next(), chars.next()) {
        (Some(key), Some(direction), None) => (key, direction),
        _ => return Err(format!("bad key action in `{entry}`")),
    };
    let key = Key::from_char(key).ok_or_else(|| format!("unknown key `{key}` in `{entry}`"))?;
    let event = match direction {
        '+' => KeyEvent::down(key),
        '-' => KeyEvent::up(key),
        other => return Err(format!("expected `+` or `-` after key, got `{other}`")),
    };

    Ok(ScriptedKey { frame, event })
}
