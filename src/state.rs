use crate::client::RemoteClient;
use crate::session::ResultsView;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub client: RemoteClient,
    pub view: Arc<Mutex<ResultsView>>,
}

impl AppState {
    pub fn new(client: RemoteClient) -> Self {
        Self {
            client,
            view: Arc::new(Mutex::new(ResultsView::new())),
        }
    }
}
