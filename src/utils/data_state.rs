/// Type-state for the outcome of a request/response cycle
///
/// A single enum instead of separate `result`/`error` slots, so the view can
/// never hold a stale result next to a fresh error (or the other way round).
///
/// ```
/// let mut state: DataState<u32, String> = DataState::Idle;
///
/// // Before the request goes out:
/// state = DataState::Loading;
/// assert!(state.is_loading());
///
/// // Once the response resolves:
/// state = Ok::<u32, String>(7).into();
/// assert_eq!(state.data(), Some(&7));
///
/// state = Err::<u32, String>("NOT FOUND".to_string()).into();
/// assert_eq!(state.error().map(String::as_str), Some("NOT FOUND"));
/// ```

#[derive(Debug, Clone, PartialEq)]
pub enum DataState<T, E = String> {
    /// Nothing requested yet
    Idle,

    /// A request went out, nothing has resolved since
    Loading,

    /// Last resolved response was a success
    Loaded(T),

    /// Last resolved response was a failure
    Error(E),
}

impl<T, E> DataState<T, E> {
    pub fn is_idle(&self) -> bool {
        matches!(self, DataState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    /// Returns the data if loaded, None otherwise
    pub fn data(&self) -> Option<&T> {
        match self {
            DataState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the error if in error state, None otherwise
    pub fn error(&self) -> Option<&E> {
        match self {
            DataState::Error(err) => Some(err),
            _ => None,
        }
    }
}

impl<T, E> Default for DataState<T, E> {
    fn default() -> Self {
        DataState::Idle
    }
}

/// Helper to convert Result into DataState
impl<T, E, F: Into<E>> From<Result<T, F>> for DataState<T, E> {
    fn from(result: Result<T, F>) -> Self {
        match result {
            Ok(data) => DataState::Loaded(data),
            Err(err) => DataState::Error(err.into()),
        }
    }
}
