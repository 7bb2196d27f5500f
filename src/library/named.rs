use crate::{
    curve::bezier::CubicBezierCurve,
    foundation::error::{EaseflowError, EaseflowResult},
    library::store::{CurveMap, CurveStore},
};

/// Built-in curves shipped with the tool. Read-only and never persisted.
pub const DEFAULT_CURVES: &[(&str, CubicBezierCurve)] = &[
    ("Ease Out", CubicBezierCurve::new(0.344, 0.053, 0.002, 1.0)),
    ("Ease In", CubicBezierCurve::new(0.927, 0.0, 0.852, 0.953)),
    ("Ease In-Out", CubicBezierCurve::new(0.694, 0.0, 0.306, 1.0)),
    ("Smooth Linear", CubicBezierCurve::new(0.285, 0.0, 0.648, 1.0)),
];

/// Which half of the library a name is looked up in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CurveSource {
    Default,
    User,
}

/// Built-in defaults plus the user's saved curves.
///
/// The two sets are disjoint by construction: defaults live in
/// [`DEFAULT_CURVES`], user curves in this value. Only user names must be unique.
#[derive(Clone, Debug, Default)]
pub struct NamedCurveLibrary {
    user: CurveMap,
}

impl NamedCurveLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_user_curves(user: CurveMap) -> Self {
        Self { user }
    }

    pub fn load(store: &dyn CurveStore) -> EaseflowResult<Self> {
        Ok(Self::from_user_curves(store.load()?))
    }

    pub fn persist(&self, store: &dyn CurveStore) -> EaseflowResult<()> {
        store.save(&self.user)
    }

    /// Save a new user curve.
    ///
    /// The name is trimmed first. An empty name or one already used by another
    /// user curve is rejected and the library is left untouched.
    pub fn add_user_curve(&mut self, name: &str, curve: CubicBezierCurve) -> EaseflowResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EaseflowError::validation("curve name must not be empty"));
        }
        if self.user.contains_key(name) {
            return Err(EaseflowError::duplicate_name(name));
        }
        tracing::debug!(name, %curve, "adding user curve");
        self.user.insert(name.to_string(), curve);
        Ok(())
    }

    /// Remove a user curve, returning it if it existed.
    pub fn delete_user_curve(&mut self, name: &str) -> Option<CubicBezierCurve> {
        let removed = self.user.remove(name.trim());
        if removed.is_some() {
            tracing::debug!(name, "deleted user curve");
        }
        removed
    }

    pub fn user_curve(&self, name: &str) -> Option<CubicBezierCurve> {
        self.user.get(name.trim()).copied()
    }

    pub fn default_curve(&self, name: &str) -> Option<CubicBezierCurve> {
        DEFAULT_CURVES
            .iter()
            .find(|(n, _)| *n == name.trim())
            .map(|(_, c)| *c)
    }

    pub fn get(&self, name: &str, source: CurveSource) -> Option<CubicBezierCurve> {
        match source {
            CurveSource::Default => self.default_curve(name),
            CurveSource::User => self.user_curve(name),
        }
    }

    /// Look a name up in the user curves first, then in the defaults.
    pub fn resolve(&self, name: &str) -> Option<(CurveSource, CubicBezierCurve)> {
        self.user_curve(name)
            .map(|c| (CurveSource::User, c))
            .or_else(|| self.default_curve(name).map(|c| (CurveSource::Default, c)))
    }

    pub fn has_user_curve(&self, name: &str) -> bool {
        self.user.contains_key(name.trim())
    }

    pub fn user_curve_count(&self) -> usize {
        self.user.len()
    }

    pub fn user_curves(&self) -> &CurveMap {
        &self.user
    }

    pub fn default_curves(&self) -> impl Iterator<Item = (&'static str, CubicBezierCurve)> {
        DEFAULT_CURVES.iter().copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/library/named.rs"]
mod tests;
