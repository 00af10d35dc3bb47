use globset::{Glob, GlobSet, GlobSetBuilder};

/// Include filter over control and test ids.
#[derive(Clone, Debug, Default)]
pub struct IdFilter {
    set: Option<GlobSet>,
}

impl IdFilter {
    /// Build from glob patterns (case-sensitive). No patterns matches everything.
    pub fn new(patterns: &[String]) -> Result<Self, globset::Error> {
        if patterns.is_empty() {
            return Ok(Self::default());
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(Glob::new(pattern)?);
        }
        Ok(Self {
            set: Some(builder.build()?),
        })
    }

    pub fn matches(&self, id: &str) -> bool {
        self.set.as_ref().map(|set| set.is_match(id)).unwrap_or(true)
    }
}
