#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    pub(crate) client: reqwest::Client,
}
