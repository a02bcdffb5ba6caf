use serde::Serialize;

/// Initial render flag. Nodes whose visibility changes per frame (the
/// starfield) are toggled by the renderer from `FrameState`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Visibility {
    pub visible: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self::when(true)
    }
}

impl Visibility {
    pub const fn when(visible: bool) -> Self {
        Self { visible }
    }

    pub const fn hidden() -> Self {
        Self::when(false)
    }
}

#[cfg(test)]
mod tests {
    use super::Visibility;

    #[test]
    fn nodes_default_to_visible() {
        assert!(Visibility::default().visible);
        assert!(!Visibility::hidden().visible);
        assert_eq!(
            serde_json::to_value(Visibility::when(false)).expect("serialize"),
            serde_json::json!(false)
        );
    }
}
