use server_api::ApiContext;

#[derive(Clone, Default)]
pub(crate) struct AppState {
    pub(crate) api: ApiContext,
}
