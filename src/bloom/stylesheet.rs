/// `id` attribute of the injected `<style>` element.
pub const STYLESHEET_ID: &str = "bloomy-background-style";

/// Rules consuming the per-bloom custom properties. The container only
/// needs a positioning context; the default selector gets one here.
pub const STYLESHEET: &str = r#".bloomy-background {
  position: relative;
  overflow: hidden;
}

.bloom {
  position: absolute;
  width: var(--size, 400px);
  height: var(--size, 400px);
  border-radius: 50%;
  background: radial-gradient(circle, var(--color, #fff) 0%, transparent 70%);
  filter: blur(var(--blur, 120px));
  opacity: var(--opacity, 0.3);
  transform: translate(-50%, -50%);
  pointer-events: none;
  z-index: 0;
}

.bloom.animate {
  animation-name: bloom-drift;
  animation-timing-function: ease-in-out;
  animation-iteration-count: infinite;
  animation-direction: alternate;
}

@keyframes bloom-drift {
  0% { transform: translate(-50%, -50%) scale(1); }
  50% { transform: translate(-46%, -54%) scale(1.08); }
  100% { transform: translate(-54%, -47%) scale(0.94); }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bloom::{ANIMATE_CLASS, BLOOM_CLASS};

    #[test]
    fn rules_target_the_markers_and_properties() {
        assert!(STYLESHEET.contains(&format!(".{} {{", BLOOM_CLASS)));
        assert!(STYLESHEET.contains(&format!(".{}.{} {{", BLOOM_CLASS, ANIMATE_CLASS)));
        for prop in ["--size", "--blur", "--opacity", "--color"] {
            assert!(STYLESHEET.contains(&format!("var({}", prop)), "{} unused", prop);
        }
    }
}
