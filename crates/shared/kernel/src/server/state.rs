use fxhash::FxHashMap;
use std::any::{TypeId, type_name};
use std::borrow::Cow;
use std::sync::Arc;
use whub_domain::config::ApiConfig;
use whub_domain::registry::{FeatureSlice, InitializedSlice};

#[whub_derive::whub_error]
pub enum ApiStateError {
    #[error("API state has no configuration{}", format_context(.context))]
    MissingConfig { context: Option<Cow<'static, str>> },
    #[error("Feature slice `{slice}` is not registered{}", format_context(.context))]
    MissingSlice { slice: &'static str, context: Option<Cow<'static, str>> },
}

type Slices = FxHashMap<TypeId, InitializedSlice>;

/// Router state shared by every handler.
///
/// Cloning is cheap: the configuration and the slice table are both behind `Arc`.
#[derive(Debug, Clone)]
pub struct ApiState {
    pub config: ApiConfig,
    slices: Arc<Slices>,
}

impl ApiState {
    #[must_use]
    pub fn builder() -> ApiStateBuilder {
        ApiStateBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.slices.get(&TypeId::of::<T>())?.downcast_ref::<T>()
    }

    /// # Errors
    /// [`ApiStateError::MissingSlice`] when `T` was never registered.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, ApiStateError> {
        self.get_slice::<T>()
            .ok_or(ApiStateError::MissingSlice { slice: type_name::<T>(), context: None })
    }

    pub fn slice_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slices.values().map(|slice| slice.name)
    }

    #[must_use]
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }
}

#[derive(Debug, Default)]
pub struct ApiStateBuilder {
    config: Option<ApiConfig>,
    slices: Slices,
}

impl ApiStateBuilder {
    #[must_use]
    pub fn config(self, config: ApiConfig) -> Self {
        Self { config: Some(config), ..self }
    }

    /// Adds a slice. A second slice of the same type replaces the first.
    #[must_use]
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        if self.slices.insert(slice.id, slice).is_some() {
            tracing::warn!("Feature slice registered twice, keeping the latest");
        }
        self
    }

    #[must_use]
    pub fn register_slices(self, slices: impl IntoIterator<Item = InitializedSlice>) -> Self {
        slices.into_iter().fold(self, Self::register_slice)
    }

    /// # Errors
    /// [`ApiStateError::MissingConfig`] when [`ApiStateBuilder::config`] was not called.
    pub fn build(self) -> Result<ApiState, ApiStateError> {
        let Some(config) = self.config else {
            return Err(ApiStateError::MissingConfig { context: None });
        };
        tracing::debug!(slices = self.slices.len(), "API state built");
        Ok(ApiState { config, slices: Arc::new(self.slices) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    #[derive(Debug)]
    struct Probe(u8);

    impl FeatureSlice for Probe {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn state_with(slices: Vec<InitializedSlice>) -> ApiState {
        ApiState::builder()
            .config(ApiConfig::default())
            .register_slices(slices)
            .build()
            .expect("state builds")
    }

    #[test]
    fn build_requires_config() {
        let err = ApiState::builder().build().expect_err("config is mandatory");
        assert!(matches!(err, ApiStateError::MissingConfig { .. }));
    }

    #[test]
    fn registered_slices_are_retrievable_by_type() {
        let state = state_with(vec![InitializedSlice::new(Probe(7))]);

        assert_eq!(state.get_slice::<Probe>().map(|p| p.0), Some(7));
        assert_eq!(state.slice_count(), 1);
        assert!(state.slice_names().any(|name| name.ends_with("Probe")));
    }

    #[test]
    fn later_registration_wins() {
        let state =
            state_with(vec![InitializedSlice::new(Probe(1)), InitializedSlice::new(Probe(2))]);

        assert_eq!(state.slice_count(), 1);
        assert_eq!(state.get_slice::<Probe>().map(|p| p.0), Some(2));
    }

    #[test]
    fn missing_slice_reports_type_name() {
        let state = state_with(Vec::new());
        let err = state.try_get_slice::<Probe>().expect_err("nothing registered");
        assert!(err.to_string().contains("Probe"));
    }
}
