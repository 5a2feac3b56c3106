use super::style::BloomStyle;
use crate::config::BloomConfig;
use crate::error::BloomError;
use crate::random::RandomSource;
use crate::tree::HostTree;

pub const BLOOM_TAG: &str = "div";
pub const BLOOM_CLASS: &str = "bloom";
pub const ANIMATE_CLASS: &str = "animate";

/// Result of one generation pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Generation {
    /// No element matched the selector; nothing was touched.
    TargetMissing { selector: String },
    /// `cleared` previous blooms were removed and `blooms` appended, in
    /// insertion order.
    Populated {
        cleared: usize,
        blooms: Vec<BloomStyle>,
    },
}

impl Generation {
    pub fn created(&self) -> usize {
        match self {
            Generation::TargetMissing { .. } => 0,
            Generation::Populated { blooms, .. } => blooms.len(),
        }
    }
}

/// Populates the container matched by `config.selector` with
/// `config.count` randomly styled blooms.
///
/// The configuration is validated before the tree is touched. A missing
/// container is not an error: a warning is logged and
/// [`Generation::TargetMissing`] returned with the tree untouched.
pub fn generate<T, R>(tree: &mut T, rng: &mut R, config: &BloomConfig) -> Result<Generation, BloomError>
where
    T: HostTree + ?Sized,
    R: RandomSource + ?Sized,
{
    config.validate()?;

    let container = match locate(tree, &config.selector) {
        Ok(container) => container,
        Err(BloomError::TargetNotFound { selector }) => {
            log::warn!("generate: container not found for selector {:?}", selector);
            return Ok(Generation::TargetMissing { selector });
        }
        Err(e) => return Err(e),
    };

    let cleared = if config.clear_before {
        remove_blooms(tree, &container)?
    } else {
        0
    };

    let mut blooms = Vec::with_capacity(config.count as usize);
    for i in 0..config.count {
        let style = BloomStyle::draw(&mut *rng, config);
        let element = tree.create_element(BLOOM_TAG)?;
        tree.add_class(&element, BLOOM_CLASS)?;
        if style.animation.is_some() {
            tree.add_class(&element, ANIMATE_CLASS)?;
        }
        for (name, value) in style.properties() {
            tree.set_style_property(&element, name, &value)?;
        }
        tree.append_child(&container, &element)?;
        log::trace!("bloom {}: {:?}", i, style);
        blooms.push(style);
    }

    log::debug!(
        "generate {:?}: cleared {}, created {}, animate {}",
        config.selector,
        cleared,
        blooms.len(),
        config.animate
    );

    Ok(Generation::Populated { cleared, blooms })
}

/// Removes every bloom from the container matched by `selector` and
/// returns how many were removed. A missing container logs a warning
/// and removes nothing.
pub fn clear<T>(tree: &mut T, selector: &str) -> Result<usize, BloomError>
where
    T: HostTree + ?Sized,
{
    match locate(tree, selector) {
        Ok(container) => remove_blooms(tree, &container),
        Err(BloomError::TargetNotFound { selector }) => {
            log::warn!("clear: container not found for selector {:?}", selector);
            Ok(0)
        }
        Err(e) => Err(e),
    }
}

fn locate<T: HostTree + ?Sized>(tree: &T, selector: &str) -> Result<T::Element, BloomError> {
    tree.query_selector(selector)?
        .ok_or_else(|| BloomError::TargetNotFound {
            selector: selector.to_string(),
        })
}

fn remove_blooms<T: HostTree + ?Sized>(tree: &mut T, container: &T::Element) -> Result<usize, BloomError> {
    let stale = tree.children_with_class(container, BLOOM_CLASS)?;
    for element in &stale {
        tree.remove(element)?;
    }
    Ok(stale.len())
}
