use std::sync::Once;

use wasm_bindgen::prelude::*;

pub mod bloom;
pub mod config;
pub mod error;
pub mod random;
pub mod tree;

pub use bloom::{BloomStyle, Generation, clear, generate};
pub use config::{BloomConfig, BloomOptions, Range};
pub use error::BloomError;
pub use random::{MathRandom, RandomSource, SeededRandom};
pub use tree::{DomTree, HostTree, MemoryTree};

static LOGGER: Once = Once::new();

fn init_logger(level: log::Level) {
    LOGGER.call_once(|| {
        wasm_logger::init(wasm_logger::Config::new(level));
        log::info!("bloomy logging at {}", level);
    });
}

/// Routes `log` output to the browser console. Later calls are no-ops.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) {
    let level = level
        .as_deref()
        .and_then(|l| l.parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info);
    init_logger(level);
}

fn options_from_js(options: &JsValue) -> Result<BloomOptions, BloomError> {
    if options.is_undefined() || options.is_null() {
        return Ok(BloomOptions::default());
    }
    let json = js_sys::JSON::stringify(options)
        .map_err(|e| BloomError::InvalidOptions(format!("{:?}", e)))?
        .as_string()
        .ok_or_else(|| BloomError::InvalidOptions("options are not JSON-serializable".to_string()))?;
    BloomOptions::from_json(&json)
}

fn config_from_js(options: &JsValue) -> Result<BloomConfig, BloomError> {
    let config = BloomConfig::merged(options_from_js(options)?);
    config.validate()?;
    Ok(config)
}

/// Populates the matched container with randomized blooms and returns
/// how many were created. A missing container only logs a warning.
#[wasm_bindgen(js_name = generateBlooms)]
pub fn generate_blooms(options: JsValue) -> Result<u32, JsValue> {
    init_logger(log::Level::Info);
    let config = config_from_js(&options)?;
    let mut tree = DomTree::from_window()?;
    let generation = generate(&mut tree, &mut MathRandom, &config)?;
    Ok(generation.created() as u32)
}

#[wasm_bindgen(js_name = clearBlooms)]
pub fn clear_blooms(selector: Option<String>) -> Result<u32, JsValue> {
    init_logger(log::Level::Info);
    let selector = selector.unwrap_or_else(|| config::DEFAULT_SELECTOR.to_string());
    let mut tree = DomTree::from_window()?;
    Ok(clear(&mut tree, &selector)? as u32)
}

/// Adds the bundled bloom stylesheet to the page once.
#[wasm_bindgen(js_name = installStylesheet)]
pub fn install_stylesheet() -> Result<bool, JsValue> {
    let tree = DomTree::from_window()?;
    Ok(tree.install_stylesheet(bloom::STYLESHEET_ID, bloom::STYLESHEET)?)
}

/// Stock page setup: a default static pass, then a denser animated
/// pass. `clearBefore` stays on, so the animated layer replaces the first.
#[wasm_bindgen(js_name = mountDefaultBackgrounds)]
pub fn mount_default_backgrounds() -> Result<(), JsValue> {
    init_logger(log::Level::Info);
    let mut tree = DomTree::from_window()?;
    let mut rng = MathRandom;

    generate(&mut tree, &mut rng, &BloomConfig::default())?;

    let animated = BloomConfig::default()
        .with_count(10)
        .with_animate(true)
        .with_size_range(250.0, 700.0)
        .with_blur_range(80.0, 220.0);
    generate(&mut tree, &mut rng, &animated)?;
    Ok(())
}

/// A reusable background layer: one merged configuration and its own
/// random source.
#[wasm_bindgen]
pub struct BloomyBackground {
    config: BloomConfig,
    rng: Box<dyn RandomSource>,
}

#[wasm_bindgen]
impl BloomyBackground {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<BloomyBackground, JsValue> {
        init_logger(log::Level::Info);
        let config = config_from_js(&options)?;
        log::info!("background layer for {:?}", config.selector);
        Ok(BloomyBackground {
            config,
            rng: Box::new(MathRandom),
        })
    }

    /// Same as the constructor but with a reproducible layout.
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(options: JsValue, seed: u32) -> Result<BloomyBackground, JsValue> {
        let mut background = BloomyBackground::new(options)?;
        background.rng = Box::new(SeededRandom::new(u64::from(seed)));
        Ok(background)
    }

    #[wasm_bindgen(getter)]
    pub fn selector(&self) -> String {
        self.config.selector.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn count(&self) -> u32 {
        self.config.count
    }

    pub fn regenerate(&mut self) -> Result<u32, JsValue> {
        let mut tree = DomTree::from_window()?;
        let generation = generate(&mut tree, self.rng.as_mut(), &self.config)?;
        Ok(generation.created() as u32)
    }

    pub fn clear(&self) -> Result<u32, JsValue> {
        let mut tree = DomTree::from_window()?;
        Ok(clear(&mut tree, &self.config.selector)? as u32)
    }
}
