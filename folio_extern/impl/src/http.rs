use std::{ops::Deref, sync::LazyLock};

pub static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    let homepage = env!("CARGO_PKG_HOMEPAGE");
    let version = env!("CARGO_PKG_VERSION");

    format!("Portfolio Contact Backend ({homepage}, Version {version})")
});

const _: () = assert!(!env!("CARGO_PKG_HOMEPAGE").is_empty());

#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self(
            reqwest::Client::builder()
                .user_agent(&*USER_AGENT)
                .build()
                .unwrap(),
        )
    }
}
